//! Helpers shared across features and overlays.

pub mod text;

pub use text::truncate_with_ellipsis;
