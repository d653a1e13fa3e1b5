//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and timers only, never direct state changes, so the
//! reducer stays free of side effects.

use std::time::Duration;

use absence_core::export::{ExportId, ResetTicket};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Write the composed message to the clipboard.
    CopyToClipboard { export: ExportId, text: String },

    /// Schedule the "copied" revert, replacing any pending one.
    ScheduleCopyReset { ticket: ResetTicket, after: Duration },
}
