//! Copy-to-clipboard state machine.
//!
//! ```text
//! Idle --(write ok)--> Copied --(reset ticket fires)--> Idle
//! Idle --(write failed)--> Idle
//! Copied --(write ok)--> Copied (new ticket, old ticket is void)
//! ```
//!
//! The exporter itself never sleeps or spawns. It hands out an [`ExportId`]
//! for each clipboard write and a [`ResetTicket`] for each scheduled revert;
//! whoever owns the timer reports back with the ticket, and only the newest
//! ticket can flip `is_copied` back to false.

use std::time::Duration;

use crate::clipboard::{Clipboard, ClipboardError};

/// How long `is_copied` stays true after a successful copy.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

pub const COPY_SUCCESS_MESSAGE: &str = "Message copied to clipboard!";
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy message";

/// Identifies one in-flight clipboard write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExportId(u64);

/// Identifies one scheduled `is_copied` revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResetTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// One-shot user-visible notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Result of finishing an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub notification: Notification,
    /// A revert to schedule after [`COPY_FEEDBACK_DURATION`]. Any previously
    /// issued ticket is void from this point on.
    pub schedule_reset: Option<ResetTicket>,
}

#[derive(Debug, Default)]
pub struct ClipboardExporter {
    is_copied: bool,
    pending: Option<ExportId>,
    reset_ticket: Option<ResetTicket>,
    next_id: u64,
}

impl ClipboardExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_copied(&self) -> bool {
        self.is_copied
    }

    /// True while a clipboard write is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The ticket that currently governs `is_copied`, if a revert is pending.
    #[cfg(test)]
    fn pending_reset(&self) -> Option<ResetTicket> {
        self.reset_ticket
    }

    fn next(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Starts an export. Returns `None` while another write is still pending.
    pub fn begin_export(&mut self) -> Option<ExportId> {
        if self.pending.is_some() {
            tracing::debug!("export ignored, previous write still pending");
            return None;
        }
        let id = ExportId(self.next());
        self.pending = Some(id);
        Some(id)
    }

    /// Applies the clipboard result for `id`.
    ///
    /// Returns `None` if `id` is not the pending export.
    pub fn finish_export(
        &mut self,
        id: ExportId,
        result: Result<(), ClipboardError>,
    ) -> Option<ExportOutcome> {
        if self.pending != Some(id) {
            return None;
        }
        self.pending = None;

        match result {
            Ok(()) => {
                let ticket = ResetTicket(self.next());
                self.is_copied = true;
                self.reset_ticket = Some(ticket);
                tracing::info!("message copied to clipboard");
                Some(ExportOutcome {
                    notification: Notification::success(COPY_SUCCESS_MESSAGE),
                    schedule_reset: Some(ticket),
                })
            }
            Err(err) => {
                // is_copied and any running revert are left as they are.
                tracing::warn!(error = %err, "clipboard write failed");
                Some(ExportOutcome {
                    notification: Notification::error(COPY_FAILURE_MESSAGE),
                    schedule_reset: None,
                })
            }
        }
    }

    /// Called when a revert timer fires. Returns true if it reset `is_copied`.
    pub fn reset_elapsed(&mut self, ticket: ResetTicket) -> bool {
        if self.reset_ticket != Some(ticket) {
            return false;
        }
        self.reset_ticket = None;
        self.is_copied = false;
        true
    }

    /// Runs a whole export synchronously against `clipboard`.
    ///
    /// Used by the non-interactive path, where nothing observes the revert.
    pub fn export_with(&mut self, clipboard: &dyn Clipboard, text: &str) -> Option<ExportOutcome> {
        let id = self.begin_export()?;
        let result = clipboard.write_text(text);
        self.finish_export(id, result)
    }
}
