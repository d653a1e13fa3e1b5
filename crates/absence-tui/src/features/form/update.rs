//! Key handling for the focused form element.

use absence_core::form::Field;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Focus;
use crate::state::TuiState;

/// Follow-up the reducer has to perform after a form key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    OpenPicker(Field),
    Export,
}

pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> FormAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            tui.focus = tui.focus.next();
            return FormAction::None;
        }
        KeyCode::BackTab | KeyCode::Up => {
            tui.focus = tui.focus.prev();
            return FormAction::None;
        }
        _ => {}
    }

    let field = match tui.focus {
        Focus::CopyButton => {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => FormAction::Export,
                _ => FormAction::None,
            };
        }
        Focus::Field(field) => field,
    };

    if field.is_choice() {
        match key.code {
            KeyCode::Left => tui.form.cycle_choice(field, false),
            KeyCode::Right => tui.form.cycle_choice(field, true),
            KeyCode::Enter | KeyCode::Char(' ') => return FormAction::OpenPicker(field),
            _ => {}
        }
        return FormAction::None;
    }

    match key.code {
        KeyCode::Char('u') if ctrl => tui.form.update(field, ""),
        KeyCode::Char(c) if !ctrl => tui.form.push_char(field, c),
        KeyCode::Backspace => tui.form.pop_char(field),
        KeyCode::Enter => tui.focus = tui.focus.next(),
        _ => {}
    }
    FormAction::None
}

/// Bracketed paste goes into the focused free-text field.
pub fn handle_paste(tui: &mut TuiState, text: &str) {
    if let Some(field) = tui.focus.field()
        && !field.is_choice()
    {
        tui.form.insert_str(field, text);
    }
}
