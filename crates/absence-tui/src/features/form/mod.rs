//! The message form: focus handling, key handling and the inline-field card.

mod render;
mod state;
mod update;

pub use render::{render_copy_button, render_form};
pub use state::Focus;
pub use update::{FormAction, handle_key, handle_paste};
