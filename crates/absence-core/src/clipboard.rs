//! System clipboard capability.
//!
//! Transports:
//! 1. OSC 52 - terminal clipboard escape sequence (works over SSH)
//! 2. System clipboard via the `arboard` crate
//!
//! `Auto` tries OSC 52 first and falls back to the system clipboard.

use std::io::{IsTerminal, Write};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Clipboard write errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// OSC 52 write failed.
    #[error("OSC 52 clipboard failed: {0}")]
    Osc52(String),
    /// System clipboard operation failed.
    #[error("System clipboard failed: {0}")]
    System(String),
}

/// Something that accepts text for the clipboard.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Which transport the system clipboard uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    Osc52,
    System,
}

impl ClipboardBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            ClipboardBackend::Auto => "auto",
            ClipboardBackend::Osc52 => "osc52",
            ClipboardBackend::System => "system",
        }
    }
}

/// The real clipboard, using the configured transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard {
    backend: ClipboardBackend,
}

impl SystemClipboard {
    pub fn new(backend: ClipboardBackend) -> Self {
        Self { backend }
    }

    /// Copies text using the OSC 52 escape sequence on stdout.
    ///
    /// Only a terminal intercepts the sequence. When stdout is redirected the
    /// bytes would land in the output, so the copy fails instead.
    fn copy_osc52(text: &str) -> Result<(), ClipboardError> {
        let stdout = std::io::stdout();
        let is_terminal = stdout.is_terminal();
        write_osc52(&mut stdout.lock(), is_terminal, text)
    }

    fn copy_system(text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::System(e.to_string()))?;

        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::System(e.to_string()))?;

        Ok(())
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        match self.backend {
            ClipboardBackend::Osc52 => Self::copy_osc52(text),
            ClipboardBackend::System => Self::copy_system(text),
            ClipboardBackend::Auto => {
                if let Err(err) = Self::copy_osc52(text) {
                    tracing::debug!(error = %err, "OSC 52 failed, falling back to system clipboard");
                    return Self::copy_system(text);
                }
                Ok(())
            }
        }
    }
}

fn write_osc52(out: &mut impl Write, is_terminal: bool, text: &str) -> Result<(), ClipboardError> {
    use base64::Engine;

    if !is_terminal {
        return Err(ClipboardError::Osc52("stdout is not a terminal".to_string()));
    }

    let encoded = base64::engine::general_purpose::STANDARD.encode(text);

    // ESC ] 52 ; c ; <base64-data> ESC \   ('c' = system clipboard)
    write!(out, "\x1b]52;c;{encoded}\x1b\\").map_err(|e| ClipboardError::Osc52(e.to_string()))?;
    out.flush().map_err(|e| ClipboardError::Osc52(e.to_string()))
}

/// In-memory clipboard that records writes. Used by tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fail_with: Arc<Mutex<Option<ClipboardError>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following write fail with `err` (or succeed, with `None`).
    pub fn set_failure(&self, err: Option<ClipboardError>) {
        if let Ok(mut slot) = self.fail_with.lock() {
            *slot = err;
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = self.fail_with.lock().ok().and_then(|slot| slot.clone()) {
            return Err(err);
        }
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(text.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_writes_sequence_to_terminal() {
        let mut out = Vec::new();
        write_osc52(&mut out, true, "hi").unwrap();
        assert_eq!(out, b"\x1b]52;c;aGk=\x1b\\");
    }

    #[test]
    fn test_osc52_refuses_redirected_output() {
        let mut out = Vec::new();
        let err = write_osc52(&mut out, false, "hi").unwrap_err();
        assert!(matches!(err, ClipboardError::Osc52(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_memory_clipboard_records_writes() {
        let clipboard = MemoryClipboard::new();
        clipboard.write_text("one").unwrap();
        clipboard.write_text("two").unwrap();
        assert_eq!(clipboard.writes(), vec!["one", "two"]);
    }

    #[test]
    fn test_memory_clipboard_failure() {
        let clipboard = MemoryClipboard::new();
        clipboard.set_failure(Some(ClipboardError::System("denied".into())));
        let err = clipboard.write_text("one").unwrap_err();
        assert_eq!(err.to_string(), "System clipboard failed: denied");
        assert!(clipboard.writes().is_empty());

        clipboard.set_failure(None);
        assert!(clipboard.write_text("two").is_ok());
    }

    #[test]
    fn test_backend_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            clipboard: ClipboardBackend,
        }
        let parsed: Wrapper = toml::from_str("clipboard = \"osc52\"").unwrap();
        assert_eq!(parsed.clipboard, ClipboardBackend::Osc52);
    }
}
