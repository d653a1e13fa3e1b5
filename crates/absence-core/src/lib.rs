//! Core library for the absence message generator (form, message, clipboard, config).

pub mod clipboard;
pub mod config;
pub mod export;
pub mod form;
pub mod logging;
pub mod message;
