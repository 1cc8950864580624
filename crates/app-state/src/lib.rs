//! Application state management for the Coral moderation admin
//!
//! This crate provides the moderation queue UI state, the pure transition
//! function that drives it, and the store that owns the state for a session.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod moderation;
pub mod store;

pub use moderation::{transition, ModerationAction, ModerationUiState, UserRecord};
pub use store::{ModerationStore, StoreError};
