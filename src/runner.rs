use crate::commands::{Command, InputArgs};
use anyhow::{Context, Result};
use app_state::{ModerationAction, ModerationStore};
use app_ui::{Commenter, FlaggedAccounts, FlaggedAccountsProps};
use i18n::Translator;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use storage::{reset_shortcuts_note, KvConfig, KvStore};

pub struct Runner {
    kv: KvStore,
    translator: Translator,
}

impl Runner {
    pub fn new(store: Option<KvConfig>, locale: &str) -> Result<Self> {
        let kv = match store {
            Some(config) => {
                let path = config.path.clone();
                KvStore::new(config).with_context(|| format!("Failed to open store at {path}"))?
            }
            None => KvStore::in_memory()?,
        };
        let translator =
            Translator::for_locale(locale).with_context(|| format!("Unsupported locale {locale}"))?;
        Ok(Self { kv, translator })
    }

    pub fn run(&self, command: Command, out: &mut dyn Write) -> Result<()> {
        match command {
            Command::Replay(args) => {
                let actions = read_actions(BufReader::new(open_input(&args)?))?;
                let mut store = ModerationStore::new(self.kv.clone());
                let changes = store.dispatch_all(&actions)?;
                tracing::info!(actions = actions.len(), changes, "replayed moderation actions");
                self.kv.flush()?;
                self.print(out, store.state())
            }
            Command::Flagged(args) => {
                let mut input = String::new();
                open_input(&args)?.read_to_string(&mut input)?;
                let commenters: Vec<Commenter> =
                    serde_json::from_str(&input).context("Expected a JSON array of commenters")?;
                let props = FlaggedAccountsProps::new(commenters);
                self.print(out, &FlaggedAccounts::new(&props).render(&self.translator))
            }
            Command::TypeDefs(args) => {
                write!(out, "{}", reaction::type_def_generator(&args.reaction))?;
                Ok(())
            }
            Command::ResetShortcutsNote => {
                let removed = reset_shortcuts_note(&self.kv)?;
                self.kv.flush()?;
                tracing::info!(removed, "shortcuts note preference reset");
                Ok(())
            }
        }
    }

    fn print<T: Serialize>(&self, out: &mut dyn Write, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Parse one JSON action per line, skipping blank lines
fn read_actions(reader: impl BufRead) -> Result<Vec<ModerationAction>> {
    let mut actions = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let action: ModerationAction = serde_json::from_str(&line)
            .with_context(|| format!("Invalid action on line {}", n + 1))?;
        actions.push(action);
    }
    Ok(actions)
}

fn open_input(args: &InputArgs) -> Result<Box<dyn Read>> {
    Ok(match &args.file {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        ),
        None => Box::new(io::stdin()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_input(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn run_to_string(runner: &Runner, command: Command) -> String {
        let mut out = Vec::new();
        runner.run(command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_replay_prints_final_state() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = write_input(
            &dir,
            "actions.jsonl",
            concat!(
                "{\"type\":\"SET_ACTIVE_TAB\",\"activeTab\":\"reported\"}\n",
                "\n",
                "{\"type\":\"SINGLE_VIEW\"}\n",
                "{\"type\":\"SOMETHING_ELSE\"}\n",
            ),
        );

        let runner = Runner::new(None, "en").unwrap();
        let output = run_to_string(&runner, Command::Replay(InputArgs { file: Some(file) }));
        let state: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(state["activeTab"], "reported");
        assert_eq!(state["singleView"], true);
    }

    #[test]
    fn test_replay_tolerates_odd_payloads() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = write_input(
            &dir,
            "odd.jsonl",
            concat!(
                "{\"type\":\"TOGGLE_MODAL\",\"open\":true}\n",
                "{\"payload\":1}\n",
                "{\"type\":7}\n",
                "{\"type\":\"SHOW_BANUSER_DIALOG\",\"commentId\":42,\"user\":null}\n",
                "{\"type\":\"TOGGLE_MODAL\",\"open\":null}\n",
            ),
        );

        let runner = Runner::new(None, "en").unwrap();
        let output = run_to_string(&runner, Command::Replay(InputArgs { file: Some(file) }));
        let state: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(state["banDialog"], true);
        assert_eq!(state["commentId"], "42");
        assert_eq!(state["modalOpen"], false);
    }

    #[test]
    fn test_replay_rejects_malformed_line() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = write_input(&dir, "bad.jsonl", "{\"type\":\"SINGLE_VIEW\"}\nnot json\n");

        let runner = Runner::new(None, "en").unwrap();
        let err = runner
            .run(Command::Replay(InputArgs { file: Some(file) }), &mut Vec::new())
            .unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_flagged_renders_tree() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = write_input(&dir, "users.json", r#"[{"id":"u1","username":"a"},{"id":"u2"}]"#);

        let runner = Runner::new(None, "en").unwrap();
        let output = run_to_string(&runner, Command::Flagged(InputArgs { file: Some(file) }));
        let tree: app_ui::Component = serde_json::from_str(&output).unwrap();

        assert_eq!(tree.count_user_entries(), 2);
    }

    #[test]
    fn test_type_defs() {
        let runner = Runner::new(None, "en").unwrap();
        let output = run_to_string(
            &runner,
            Command::TypeDefs(crate::commands::TypeDefsArgs { reaction: "like".to_string() }),
        );
        assert_eq!(output, reaction::type_def_generator("like"));
    }

    #[test]
    fn test_reset_shortcuts_note() {
        let runner = Runner::new(None, "en").unwrap();
        runner.kv.set(storage::SHORTCUTS_NOTE_KEY, &"hide").unwrap();

        run_to_string(&runner, Command::ResetShortcutsNote);
        assert!(!runner.kv.contains(storage::SHORTCUTS_NOTE_KEY).unwrap());
    }

    #[test]
    fn test_unsupported_locale_tag() {
        assert!(Runner::new(None, "??").is_err());
        assert!(Runner::new(None, "de").is_err());
        assert!(Runner::new(None, "es").is_ok());
    }
}
