//! Moderator preferences persisted on the local client
//!
//! The moderation queue keeps a single persisted preference: whether the
//! keyboard-shortcuts hint has been dismissed. It is stored as a plain string
//! under [`SHORTCUTS_NOTE_KEY`].

use crate::kv::{KvError, KvStore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Storage key of the shortcuts-note preference
pub const SHORTCUTS_NOTE_KEY: &str = "coral:shortcutsNote";

/// Preference errors
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// Underlying key-value store failed
    #[error("Key-value store error: {0}")]
    Kv(#[from] KvError),

    /// A stored value is not one the application understands
    #[error("Invalid value {value:?} stored under {key}")]
    InvalidValue {
        /// Preference key
        key: String,
        /// Raw stored value
        value: String,
    },
}

/// Result type for preference operations
pub type Result<T> = std::result::Result<T, PreferenceError>;

/// Visibility of the keyboard-shortcuts hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutsNoteVisibility {
    /// Hint is shown
    #[default]
    Show,
    /// Hint was dismissed
    Hide,
}

impl ShortcutsNoteVisibility {
    /// Stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            ShortcutsNoteVisibility::Show => "show",
            ShortcutsNoteVisibility::Hide => "hide",
        }
    }
}

impl fmt::Display for ShortcutsNoteVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShortcutsNoteVisibility {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "show" => Ok(ShortcutsNoteVisibility::Show),
            "hide" => Ok(ShortcutsNoteVisibility::Hide),
            other => Err(PreferenceError::InvalidValue {
                key: SHORTCUTS_NOTE_KEY.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// String-valued preference storage local to the running client
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    /// Read a preference, `None` when unset
    fn get_preference(&self, key: &str) -> Result<Option<String>>;

    /// Write a preference
    fn set_preference(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a preference, returning whether it was set
    fn remove_preference(&self, key: &str) -> Result<bool>;
}

impl PreferenceStore for KvStore {
    fn get_preference(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get::<String>(key)?)
    }

    fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        self.set(key, &value)?;
        Ok(())
    }

    fn remove_preference(&self, key: &str) -> Result<bool> {
        Ok(self.remove(key)?)
    }
}

/// Read the shortcuts-note preference, `Show` when unset
pub fn load_shortcuts_note(store: &dyn PreferenceStore) -> Result<ShortcutsNoteVisibility> {
    match store.get_preference(SHORTCUTS_NOTE_KEY)? {
        Some(raw) => raw.parse(),
        None => Ok(ShortcutsNoteVisibility::default()),
    }
}

/// Persist the shortcuts-note preference
pub fn save_shortcuts_note(
    store: &dyn PreferenceStore,
    visibility: ShortcutsNoteVisibility,
) -> Result<()> {
    store.set_preference(SHORTCUTS_NOTE_KEY, visibility.as_str())
}

/// Forget the shortcuts-note preference so the hint shows again
pub fn reset_shortcuts_note(store: &dyn PreferenceStore) -> Result<bool> {
    store.remove_preference(SHORTCUTS_NOTE_KEY)
}
