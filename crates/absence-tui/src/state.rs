//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── form: FormState           (six field values)
//! │   ├── focus: Focus              (focused field or the copy button)
//! │   ├── exporter: ClipboardExporter (copied flag, pending write, reset ticket)
//! │   └── toast: ToastState         (transient notification)
//! └── overlay: Option<Overlay>      (choice picker)
//! ```
//!
//! The overlay lives next to `TuiState` rather than inside it so overlay key
//! handlers can hold `&mut self` and `&TuiState` at the same time.

use absence_core::export::ClipboardExporter;
use absence_core::form::FormState;

use crate::form::Focus;
use crate::overlays::Overlay;
use crate::toast::ToastState;

pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tui: TuiState::new(),
            overlay: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-overlay UI state for one session.
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    pub form: FormState,
    pub focus: Focus,
    pub exporter: ClipboardExporter,
    pub toast: ToastState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            form: FormState::new(),
            focus: Focus::default(),
            exporter: ClipboardExporter::new(),
            toast: ToastState::default(),
        }
    }

    /// The copy button is enabled only for a complete form with no write in
    /// flight.
    pub fn can_export(&self) -> bool {
        self.form.is_complete() && !self.exporter.is_pending()
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}
