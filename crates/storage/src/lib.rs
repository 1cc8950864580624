//! Storage layer for the Coral moderation admin
//!
//! This crate provides the client-local key-value store and the typed
//! moderator preferences kept in it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod preferences;

pub use kv::{KvConfig, KvError, KvStore};
pub use preferences::{
    load_shortcuts_note, reset_shortcuts_note, save_shortcuts_note, PreferenceError,
    PreferenceStore, ShortcutsNoteVisibility, SHORTCUTS_NOTE_KEY,
};
