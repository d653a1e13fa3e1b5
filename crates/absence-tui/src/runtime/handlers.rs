//! Effect handlers for the TUI runtime.
//!
//! Handlers are async functions that perform I/O and return the `UiEvent`
//! carrying the result. They never touch state; the runtime spawns them and
//! sends the result to the inbox.

use std::sync::Arc;

use absence_core::clipboard::{Clipboard, ClipboardError};
use absence_core::export::ExportId;

use crate::events::UiEvent;

/// Writes `text` to the clipboard off the async worker threads.
///
/// Both transports block (a terminal write or a platform clipboard call).
pub async fn clipboard_write(
    clipboard: Arc<dyn Clipboard>,
    export: ExportId,
    text: String,
) -> UiEvent {
    let result = tokio::task::spawn_blocking(move || clipboard.write_text(&text))
        .await
        .unwrap_or_else(|err| Err(ClipboardError::System(err.to_string())));
    UiEvent::ClipboardWritten { export, result }
}

#[cfg(test)]
mod tests {
    use absence_core::clipboard::MemoryClipboard;
    use absence_core::export::ClipboardExporter;

    use super::*;

    fn export_id() -> ExportId {
        let mut exporter = ClipboardExporter::new();
        exporter.begin_export().unwrap()
    }

    #[tokio::test]
    async fn test_clipboard_write_reports_success() {
        let clipboard = Arc::new(MemoryClipboard::new());
        let export = export_id();

        let event = clipboard_write(clipboard.clone(), export, "hello".to_string()).await;

        let UiEvent::ClipboardWritten { export: id, result } = event else {
            panic!("unexpected event: {event:?}");
        };
        assert_eq!(id, export);
        assert_eq!(result, Ok(()));
        assert_eq!(clipboard.writes(), vec!["hello".to_string()]);
    }

    #[tokio::test]
    async fn test_clipboard_write_reports_failure() {
        let clipboard = Arc::new(MemoryClipboard::new());
        clipboard.set_failure(Some(ClipboardError::System("no display".into())));

        let event = clipboard_write(clipboard.clone(), export_id(), "hello".to_string()).await;

        let UiEvent::ClipboardWritten { result, .. } = event else {
            panic!("unexpected event: {event:?}");
        };
        assert_eq!(result, Err(ClipboardError::System("no display".into())));
        assert!(clipboard.writes().is_empty());
    }
}
