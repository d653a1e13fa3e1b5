//! State mutations requested by overlays.
//!
//! Overlays only see `&TuiState`; they describe the change they want and the
//! reducer applies it.

use absence_core::form::Field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateMutation {
    Form(FormMutation),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMutation {
    SetField { field: Field, value: String },
}
