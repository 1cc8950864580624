//! Internationalization for the Coral moderation admin
//!
//! This crate provides i18n support with bundled Fluent translations,
//! language negotiation, and message lookup by dotted key
//! (e.g. `community.no_flagged_accounts`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lang;
pub mod translator;

pub use lang::{negotiate, parse_locale, DEFAULT_LOCALE};
pub use translator::{I18nConfig, I18nError, Translator};
