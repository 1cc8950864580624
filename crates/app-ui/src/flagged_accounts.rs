//! Flagged accounts view
//!
//! Lists the user accounts that were flagged for review in the community
//! section. Each entry offers the same pair of moderation buttons; when there
//! is nothing to review a single empty-state card is shown instead.

use i18n::Translator;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::components::{Button, ButtonColor, Component, Container, EmptyCard, EventHandler};

/// Translation key of the empty-state message
pub const NO_FLAGGED_ACCOUNTS_KEY: &str = "community.no_flagged_accounts";

/// Moderation action offered on a user entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModActionButton {
    /// Approve the account
    Approve,
    /// Reject the account's username
    Reject,
}

impl ModActionButton {
    /// Buttons shown on every flagged account
    pub const FLAGGED_ACCOUNT_SET: [ModActionButton; 2] =
        [ModActionButton::Approve, ModActionButton::Reject];

    fn label_key(&self) -> &'static str {
        match self {
            ModActionButton::Approve => "modqueue.approve",
            ModActionButton::Reject => "modqueue.reject",
        }
    }

    fn color(&self) -> ButtonColor {
        match self {
            ModActionButton::Approve => ButtonColor::Positive,
            ModActionButton::Reject => ButtonColor::Negative,
        }
    }

    fn handler<'a>(&self, handlers: &'a FlaggedAccountHandlers) -> &'a EventHandler {
        match self {
            ModActionButton::Approve => &handlers.approve_user,
            ModActionButton::Reject => &handlers.show_reject_username_dialog,
        }
    }
}

/// A user account as supplied by the data layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commenter {
    /// Account ID
    pub id: String,
    /// Display username
    #[serde(default)]
    pub username: String,
    /// Remaining fields, forwarded untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Commenter {
    /// Create a commenter with no extra fields
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self { id: id.into(), username: username.into(), extra: Map::new() }
    }
}

/// Callback identifiers forwarded to every user entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlaggedAccountHandlers {
    /// Opens the ban dialog
    pub show_ban_user_dialog: EventHandler,
    /// Opens the suspend dialog
    pub show_suspend_user_dialog: EventHandler,
    /// Opens the reject-username dialog
    pub show_reject_username_dialog: EventHandler,
    /// Approves the account
    pub approve_user: EventHandler,
    /// Opens the user detail panel
    pub view_user_detail: EventHandler,
}

impl Default for FlaggedAccountHandlers {
    fn default() -> Self {
        Self {
            show_ban_user_dialog: "showBanUserDialog".to_string(),
            show_suspend_user_dialog: "showSuspendUserDialog".to_string(),
            show_reject_username_dialog: "showRejectUsernameDialog".to_string(),
            approve_user: "approveUser".to_string(),
            view_user_detail: "viewUserDetail".to_string(),
        }
    }
}

/// Props of the flagged accounts view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedAccountsProps {
    /// Flagged accounts, absent while loading
    #[serde(default)]
    pub commenters: Option<Vec<Commenter>>,
    /// Callbacks forwarded to each entry
    #[serde(flatten)]
    pub handlers: FlaggedAccountHandlers,
    /// Signed-in moderator
    #[serde(default)]
    pub current_user: Option<Commenter>,
}

impl FlaggedAccountsProps {
    /// Props for a list of commenters with the default handler names
    pub fn new(commenters: Vec<Commenter>) -> Self {
        Self { commenters: Some(commenters), ..Default::default() }
    }

    /// Set the signed-in moderator
    pub fn with_current_user(mut self, user: Commenter) -> Self {
        self.current_user = Some(user);
        self
    }

    /// Whether there is at least one account to show
    pub fn has_results(&self) -> bool {
        self.commenters.as_ref().is_some_and(|c| !c.is_empty())
    }
}

/// One rendered flagged account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntry {
    /// Stable key within the list
    pub key: usize,
    /// Position within the list
    pub index: usize,
    /// The account
    pub user: Commenter,
    /// Moderation actions offered
    pub mod_action_buttons: Vec<ModActionButton>,
    /// Rendered buttons, one per action
    pub buttons: Vec<Button>,
    /// Callbacks, forwarded unchanged
    #[serde(flatten)]
    pub handlers: FlaggedAccountHandlers,
    /// Signed-in moderator, forwarded unchanged
    pub current_user: Option<Commenter>,
}

/// Stateless view over [`FlaggedAccountsProps`]
pub struct FlaggedAccounts<'a> {
    props: &'a FlaggedAccountsProps,
}

impl<'a> FlaggedAccounts<'a> {
    /// Wrap props for rendering
    pub fn new(props: &'a FlaggedAccountsProps) -> Self {
        Self { props }
    }

    /// Build the component tree
    pub fn render(&self, translator: &Translator) -> Component {
        let content: Vec<Component> = match &self.props.commenters {
            Some(commenters) if !commenters.is_empty() => commenters
                .iter()
                .enumerate()
                .map(|(index, commenter)| self.entry(index, commenter, translator))
                .collect(),
            _ => vec![Component::EmptyCard(EmptyCard::new(
                translator.t(NO_FLAGGED_ACCOUNTS_KEY),
            ))],
        };

        Component::Container(
            Container::new().with_class("container").with_child(Component::Container(
                Container::new()
                    .with_class("mainFlaggedContent")
                    .with_children(content),
            )),
        )
    }

    fn entry(&self, index: usize, commenter: &Commenter, translator: &Translator) -> Component {
        let handlers = &self.props.handlers;
        let mod_action_buttons = ModActionButton::FLAGGED_ACCOUNT_SET.to_vec();
        let buttons = mod_action_buttons
            .iter()
            .map(|action| {
                Button::new(translator.t(action.label_key()))
                    .with_color(action.color())
                    .on_press(action.handler(handlers).clone())
                    .with_test_id(format!("flagged-{}-{:?}", index, action).to_lowercase())
            })
            .collect();

        Component::UserEntry(Box::new(UserEntry {
            key: index,
            index,
            user: commenter.clone(),
            mod_action_buttons,
            buttons,
            handlers: handlers.clone(),
            current_user: self.props.current_user.clone(),
        }))
    }
}
