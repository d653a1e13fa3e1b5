//! Feature slices: each owns its state helpers, key handling and rendering.

pub mod form;
pub mod toast;
