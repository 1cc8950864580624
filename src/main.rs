use clap::Parser;
use coral_admin::{Command, Runner};
use storage::KvConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Directory of the local preference store
    #[arg(short, long, default_value = "coral_admin_kv.db")]
    store: String,
    /// Keep preferences in memory only
    #[arg(long)]
    in_memory: bool,
    /// Locale used for translated text
    #[arg(short, long, default_value = i18n::DEFAULT_LOCALE)]
    locale: String,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = (!args.in_memory).then(|| KvConfig::new(args.store));
    let runner = Runner::new(store, &args.locale)?;
    runner.run(args.command, &mut std::io::stdout().lock())
}
