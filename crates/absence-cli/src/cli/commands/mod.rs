//! CLI command handlers.

pub mod compose;
pub mod config;
