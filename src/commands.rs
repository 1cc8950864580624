use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub enum Command {
    /// Apply JSON-lines moderation actions and print the resulting UI state.
    Replay(InputArgs),
    /// Render the flagged accounts view for a JSON array of commenters.
    Flagged(InputArgs),
    /// Print the GraphQL type definitions of a reaction plugin.
    TypeDefs(TypeDefsArgs),
    /// Forget the dismissed keyboard-shortcuts hint.
    ResetShortcutsNote,
}

#[derive(Parser, Debug)]
pub struct InputArgs {
    /// Input file (reads stdin when omitted)
    pub(crate) file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct TypeDefsArgs {
    /// Reaction name
    #[arg(short, long, default_value = "like")]
    pub(crate) reaction: String,
}
