//! Moderation queue UI state
//!
//! [`ModerationUiState`] holds the handful of flags the moderation screens need:
//! which dialogs are open, which queue tab is active, and the comment/user the
//! ban dialog is targeting. It only ever changes through [`transition`], which
//! borrows the current state and returns a fresh value, so callers can keep the
//! previous state around and diff it against the next one.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use storage::{load_shortcuts_note, PreferenceStore, ShortcutsNoteVisibility};

/// User record targeted by a pending ban or reject action
pub type UserRecord = Map<String, Value>;

/// UI state of the moderation queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModerationUiState {
    /// Whether the single-comment detail view is active
    pub single_view: bool,
    /// Whether a generic modal is open
    pub modal_open: bool,
    /// User targeted by the ban dialog
    pub user: UserRecord,
    /// Comment under moderation
    pub comment_id: Option<String>,
    /// Status of the comment under moderation
    pub comment_status: Option<String>,
    /// Whether the ban-user dialog is open
    pub ban_dialog: bool,
    /// Whether the keyboard-shortcuts hint is visible
    pub shortcuts_note_visible: ShortcutsNoteVisibility,
    /// Selected moderation queue tab
    pub active_tab: Option<String>,
    /// Whether the ban dialog shows the "previously rejected" note
    pub show_rejected_note: Option<bool>,
}

impl Default for ModerationUiState {
    fn default() -> Self {
        Self {
            single_view: false,
            modal_open: false,
            user: UserRecord::new(),
            comment_id: None,
            comment_status: None,
            ban_dialog: false,
            shortcuts_note_visible: ShortcutsNoteVisibility::Show,
            active_tab: None,
            show_rejected_note: None,
        }
    }
}

impl ModerationUiState {
    /// Build the startup state, reading the persisted shortcuts-note preference once.
    ///
    /// An unreadable or unknown stored value falls back to showing the hint.
    pub fn initial(preferences: &dyn PreferenceStore) -> Self {
        let shortcuts_note_visible = match load_shortcuts_note(preferences) {
            Ok(visibility) => visibility,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "could not read shortcuts note preference, showing hint"
                );
                ShortcutsNoteVisibility::Show
            }
        };

        Self { shortcuts_note_visible, ..Default::default() }
    }
}

/// Actions understood by the moderation reducer
///
/// On the wire an action is a JSON object tagged by `"type"`. Anything this
/// reducer does not handle, including objects with a missing or non-string tag,
/// deserializes to [`ModerationAction::Unrecognized`]. Payload fields are read
/// leniently: `null` or wrongly typed values never reject a recognized action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "type")]
pub enum ModerationAction {
    /// Close the ban-user dialog
    #[serde(rename = "HIDE_BANUSER_DIALOG")]
    HideBanUserDialog,

    /// Open the ban-user dialog for a comment and its author
    #[serde(rename = "SHOW_BANUSER_DIALOG", rename_all = "camelCase")]
    ShowBanUserDialog {
        /// Author of the comment
        #[serde(default, deserialize_with = "lenient_record")]
        user: UserRecord,
        /// Comment being moderated
        #[serde(default, deserialize_with = "lenient_string")]
        comment_id: Option<String>,
        /// Current status of that comment
        #[serde(default, deserialize_with = "lenient_string")]
        comment_status: Option<String>,
        /// Whether to show the "previously rejected" note
        #[serde(default, deserialize_with = "lenient_flag")]
        show_rejected_note: Option<bool>,
    },

    /// Select a moderation queue tab
    #[serde(rename = "SET_ACTIVE_TAB", rename_all = "camelCase")]
    SetActiveTab {
        /// Tab to select
        #[serde(default, deserialize_with = "lenient_string")]
        active_tab: Option<String>,
    },

    /// Open or close the generic modal
    #[serde(rename = "TOGGLE_MODAL")]
    ToggleModal {
        /// Whether the modal should be open
        #[serde(default, deserialize_with = "lenient_bool")]
        open: bool,
    },

    /// Flip the single-comment view
    #[serde(rename = "SINGLE_VIEW")]
    SingleView,

    /// Dismiss the keyboard-shortcuts hint
    #[serde(rename = "HIDE_SHORTCUTS_NOTE")]
    HideShortcutsNote,

    /// Any action kind owned by another part of the application
    #[serde(rename = "UNRECOGNIZED", other)]
    Unrecognized,
}

impl Serialize for ModerationAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ModerationAction::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for ModerationAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if !value.get("type").is_some_and(Value::is_string) {
            return Ok(ModerationAction::Unrecognized);
        }
        ModerationAction::deserialize(value).map_err(de::Error::custom)
    }
}

impl ModerationAction {
    /// Build a [`ModerationAction::ShowBanUserDialog`]
    pub fn show_ban_user_dialog(
        user: UserRecord,
        comment_id: impl Into<String>,
        comment_status: impl Into<String>,
        show_rejected_note: bool,
    ) -> Self {
        ModerationAction::ShowBanUserDialog {
            user,
            comment_id: Some(comment_id.into()),
            comment_status: Some(comment_status.into()),
            show_rejected_note: Some(show_rejected_note),
        }
    }

    /// Build a [`ModerationAction::SetActiveTab`]
    pub fn set_active_tab(tab: impl Into<String>) -> Self {
        ModerationAction::SetActiveTab { active_tab: Some(tab.into()) }
    }

    /// Wire tag of this action
    pub fn kind(&self) -> &'static str {
        match self {
            ModerationAction::HideBanUserDialog => "HIDE_BANUSER_DIALOG",
            ModerationAction::ShowBanUserDialog { .. } => "SHOW_BANUSER_DIALOG",
            ModerationAction::SetActiveTab { .. } => "SET_ACTIVE_TAB",
            ModerationAction::ToggleModal { .. } => "TOGGLE_MODAL",
            ModerationAction::SingleView => "SINGLE_VIEW",
            ModerationAction::HideShortcutsNote => "HIDE_SHORTCUTS_NOTE",
            ModerationAction::Unrecognized => "UNRECOGNIZED",
        }
    }
}

// Anything but an object is an empty record.
fn lenient_record<'de, D>(deserializer: D) -> Result<UserRecord, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(record) => record,
        _ => UserRecord::new(),
    })
}

// Scalars and nested values keep their JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool())
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_flag(deserializer)?.unwrap_or(false))
}

/// Compute the next moderation UI state.
///
/// Never fails and never touches `state`; unrecognized actions yield an equal copy.
pub fn transition(state: &ModerationUiState, action: &ModerationAction) -> ModerationUiState {
    match action {
        ModerationAction::HideBanUserDialog => ModerationUiState {
            ban_dialog: false,
            comment_status: None,
            ..state.clone()
        },
        ModerationAction::ShowBanUserDialog {
            user,
            comment_id,
            comment_status,
            show_rejected_note,
        } => ModerationUiState {
            user: user.clone(),
            comment_id: comment_id.clone(),
            comment_status: comment_status.clone(),
            show_rejected_note: *show_rejected_note,
            ban_dialog: true,
            ..state.clone()
        },
        ModerationAction::SetActiveTab { active_tab } => ModerationUiState {
            active_tab: active_tab.clone(),
            ..state.clone()
        },
        ModerationAction::ToggleModal { open } => ModerationUiState {
            modal_open: *open,
            ..state.clone()
        },
        ModerationAction::SingleView => ModerationUiState {
            single_view: !state.single_view,
            ..state.clone()
        },
        ModerationAction::HideShortcutsNote => ModerationUiState {
            shortcuts_note_visible: ShortcutsNoteVisibility::Hide,
            ..state.clone()
        },
        ModerationAction::Unrecognized => state.clone(),
    }
}
