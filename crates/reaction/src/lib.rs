//! Reaction plugin support for the Coral moderation admin
//!
//! This crate emits the GraphQL schema fragment a reaction plugin registers
//! with the server.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod type_defs;

pub use type_defs::{capitalize, type_def_generator};
