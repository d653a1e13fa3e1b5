//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal input,
//! the frame tick, and results of effects the runtime executed.

use absence_core::clipboard::ClipboardError;
use absence_core::export::{ExportId, ResetTicket};
use crossterm::event::Event;

#[derive(Debug)]
pub enum UiEvent {
    /// Frame tick (drives rendering and toast expiry).
    Tick,

    /// Raw terminal input.
    Terminal(Event),

    /// A clipboard write finished.
    ClipboardWritten {
        export: ExportId,
        result: Result<(), ClipboardError>,
    },

    /// The copy feedback timer for `ticket` fired.
    CopyResetElapsed { ticket: ResetTicket },
}
