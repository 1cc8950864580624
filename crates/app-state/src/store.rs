//! Moderation state container
//!
//! [`ModerationStore`] owns the single [`ModerationUiState`] value of a running
//! admin session. Each dispatch replaces the state wholesale with the result of
//! [`transition`], notifies listeners when the value changed, and performs the
//! one side effect the moderation screens have: remembering that the
//! shortcuts hint was dismissed.

use storage::{save_shortcuts_note, PreferenceError, PreferenceStore, ShortcutsNoteVisibility};
use thiserror::Error;

use crate::moderation::{transition, ModerationAction, ModerationUiState};

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Persisting a preference failed; the in-memory state was still updated
    #[error("Failed to persist preference: {0}")]
    Preference(#[from] PreferenceError),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Callback invoked with `(previous, current)` after a state change
pub type Listener = Box<dyn FnMut(&ModerationUiState, &ModerationUiState)>;

/// Owner of the moderation UI state
pub struct ModerationStore<P: PreferenceStore> {
    state: ModerationUiState,
    preferences: P,
    listeners: Vec<Listener>,
}

impl<P: PreferenceStore> ModerationStore<P> {
    /// Create a store, reading persisted preferences once
    pub fn new(preferences: P) -> Self {
        let state = ModerationUiState::initial(&preferences);
        tracing::debug!(
            shortcuts_note = %state.shortcuts_note_visible,
            "moderation store initialized"
        );

        Self { state, preferences, listeners: Vec::new() }
    }

    /// Current state
    pub fn state(&self) -> &ModerationUiState {
        &self.state
    }

    /// Register a listener for state changes
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ModerationUiState, &ModerationUiState) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Apply an action, returning whether the state changed.
    ///
    /// When persisting the dismissed shortcuts hint fails the error is returned,
    /// but the new state is kept.
    pub fn dispatch(&mut self, action: &ModerationAction) -> Result<bool> {
        let next = transition(&self.state, action);
        let changed = next != self.state;
        tracing::debug!(action = action.kind(), changed, "dispatched moderation action");

        let previous = std::mem::replace(&mut self.state, next);
        if changed {
            for listener in &mut self.listeners {
                listener(&previous, &self.state);
            }
        }

        if matches!(action, ModerationAction::HideShortcutsNote) {
            save_shortcuts_note(&self.preferences, ShortcutsNoteVisibility::Hide)?;
        }

        Ok(changed)
    }

    /// Apply a sequence of actions in order, stopping at the first error
    pub fn dispatch_all<'a, I>(&mut self, actions: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a ModerationAction>,
    {
        let mut changes = 0;
        for action in actions {
            if self.dispatch(action)? {
                changes += 1;
            }
        }
        Ok(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use std::cell::RefCell;
    use std::rc::Rc;
    use storage::{KvStore, SHORTCUTS_NOTE_KEY};

    mock! {
        Prefs {}

        impl PreferenceStore for Prefs {
            fn get_preference(&self, key: &str) -> storage::preferences::Result<Option<String>>;
            fn set_preference(&self, key: &str, value: &str) -> storage::preferences::Result<()>;
            fn remove_preference(&self, key: &str) -> storage::preferences::Result<bool>;
        }
    }

    #[test]
    fn test_new_reads_preference_once() {
        let mut prefs = MockPrefs::new();
        prefs
            .expect_get_preference()
            .withf(|key| key == SHORTCUTS_NOTE_KEY)
            .times(1)
            .returning(|_| Ok(Some("hide".to_string())));

        let mut store = ModerationStore::new(prefs);
        assert_eq!(store.state().shortcuts_note_visible, ShortcutsNoteVisibility::Hide);

        store.dispatch(&ModerationAction::SingleView).unwrap();
        store.dispatch(&ModerationAction::ToggleModal { open: true }).unwrap();
    }

    #[test]
    fn test_hide_shortcuts_note_persists() {
        let mut prefs = MockPrefs::new();
        prefs.expect_get_preference().returning(|_| Ok(None));
        prefs
            .expect_set_preference()
            .withf(|key, value| key == SHORTCUTS_NOTE_KEY && value == "hide")
            .times(1)
            .returning(|_, _| Ok(()));

        let mut store = ModerationStore::new(prefs);
        assert!(store.dispatch(&ModerationAction::HideShortcutsNote).unwrap());
        assert_eq!(store.state().shortcuts_note_visible, ShortcutsNoteVisibility::Hide);
    }

    #[test]
    fn test_persist_failure_keeps_state() {
        let mut prefs = MockPrefs::new();
        prefs.expect_get_preference().returning(|_| Ok(None));
        prefs.expect_set_preference().returning(|key, value| {
            Err(PreferenceError::InvalidValue { key: key.to_string(), value: value.to_string() })
        });

        let mut store = ModerationStore::new(prefs);
        let result = store.dispatch(&ModerationAction::HideShortcutsNote);

        assert!(matches!(result, Err(StoreError::Preference(_))));
        assert_eq!(store.state().shortcuts_note_visible, ShortcutsNoteVisibility::Hide);
    }

    #[test]
    fn test_dispatch_reports_change() {
        let mut store = ModerationStore::new(KvStore::in_memory().unwrap());

        assert!(store.dispatch(&ModerationAction::set_active_tab("premod")).unwrap());
        assert!(!store.dispatch(&ModerationAction::set_active_tab("premod")).unwrap());
        assert!(!store.dispatch(&ModerationAction::Unrecognized).unwrap());
    }

    #[test]
    fn test_listeners_see_previous_and_current() {
        let mut store = ModerationStore::new(KvStore::in_memory().unwrap());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |previous, current| {
            sink.borrow_mut().push((previous.single_view, current.single_view));
        });

        store.dispatch(&ModerationAction::SingleView).unwrap();
        store.dispatch(&ModerationAction::Unrecognized).unwrap();
        store.dispatch(&ModerationAction::SingleView).unwrap();

        assert_eq!(*seen.borrow(), vec![(false, true), (true, false)]);
    }

    #[test]
    fn test_dispatch_all_counts_changes() {
        let mut store = ModerationStore::new(KvStore::in_memory().unwrap());
        let actions = vec![
            ModerationAction::ToggleModal { open: true },
            ModerationAction::ToggleModal { open: true },
            ModerationAction::HideShortcutsNote,
        ];

        assert_eq!(store.dispatch_all(&actions).unwrap(), 2);

        let state = store.state();
        assert!(state.modal_open);
        assert_eq!(state.shortcuts_note_visible, ShortcutsNoteVisibility::Hide);
    }

    #[test]
    fn test_dismissal_survives_new_store() {
        let kv = KvStore::in_memory().unwrap();

        let mut store = ModerationStore::new(kv.clone());
        store.dispatch(&ModerationAction::HideShortcutsNote).unwrap();

        let reopened = ModerationStore::new(kv);
        assert_eq!(reopened.state().shortcuts_note_visible, ShortcutsNoteVisibility::Hide);
    }
}
