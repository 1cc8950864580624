//! User interface for the Coral moderation admin
//!
//! This crate builds serializable component trees for the admin screens.
//! Views are pure functions of their props; drawing the tree is left to
//! whichever rendering layer consumes it.
//!
//! # Views
//!
//! - [`flagged_accounts::FlaggedAccounts`] - accounts flagged for review in
//!   the community section

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod flagged_accounts;

pub use components::{Button, ButtonColor, Component, Container, EmptyCard};
pub use flagged_accounts::{
    Commenter, FlaggedAccountHandlers, FlaggedAccounts, FlaggedAccountsProps, ModActionButton,
    UserEntry,
};
