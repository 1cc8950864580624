//! Coral moderation admin
//!
//! Facade over the workspace crates plus the command runner behind the
//! `coral-admin` binary.

pub mod commands;
pub mod runner;

pub use app_state;
pub use app_ui;
pub use i18n;
pub use reaction;
pub use storage;

pub use commands::Command;
pub use runner::Runner;
