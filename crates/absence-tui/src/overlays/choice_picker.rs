use absence_core::form::Field;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};

use super::OverlayUpdate;
use crate::mutations::{FormMutation, StateMutation};
use crate::state::TuiState;

/// Picker for a fixed-choice field (time of day, salutation).
#[derive(Debug, Clone)]
pub struct ChoicePickerState {
    pub field: Field,
    pub selected: usize,
}

impl ChoicePickerState {
    /// Opens the picker with the current value preselected.
    ///
    /// Returns `None` for free-text fields.
    pub fn open(field: Field, current: &str) -> Option<Self> {
        let choices = field.choices()?;
        let selected = choices.iter().position(|c| *c == current).unwrap_or(0);
        Some(Self { field, selected })
    }

    fn choices(&self) -> &'static [&'static str] {
        self.field.choices().unwrap_or(&[])
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        render_choice_picker(frame, self, area);
    }

    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Char('c') if ctrl => OverlayUpdate::close(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.choices().len() {
                    self.selected += 1;
                }
                OverlayUpdate::stay()
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let Some(&value) = self.choices().get(self.selected) else {
                    return OverlayUpdate::close();
                };
                OverlayUpdate::close().with_mutations(vec![StateMutation::Form(
                    FormMutation::SetField {
                        field: self.field,
                        value: value.to_string(),
                    },
                )])
            }
            _ => OverlayUpdate::stay(),
        }
    }
}

fn title_for(field: Field) -> &'static str {
    match field {
        Field::TimeOfDay => "Time of Day",
        Field::Salutation => "Salutation",
        Field::Subject | Field::Reason | Field::Name | Field::RollNo => "Choose",
    }
}

pub fn render_choice_picker(frame: &mut Frame, picker: &ChoicePickerState, area: Rect) {
    use super::render_utils::{InputHint, OverlayConfig, render_overlay};

    let choices = picker.choices();
    let picker_height = (choices.len() as u16 + 3).max(5);

    let hints = [
        InputHint::new("↑↓", "navigate"),
        InputHint::new("Enter", "select"),
        InputHint::new("Esc", "cancel"),
    ];
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: title_for(picker.field),
            border_color: Color::Magenta,
            width: 40,
            height: picker_height,
            hints: &hints,
        },
    );

    let items: Vec<ListItem> = choices
        .iter()
        .map(|choice| {
            ListItem::new(Line::from(Span::styled(
                *choice,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::Magenta)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(picker.selected));
    frame.render_stateful_widget(list, layout.body, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlays::OverlayTransition;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_open_preselects_current_value() {
        let picker = ChoicePickerState::open(Field::TimeOfDay, "evening").unwrap();
        assert_eq!(picker.selected, 2);

        let picker = ChoicePickerState::open(Field::Salutation, "").unwrap();
        assert_eq!(picker.selected, 0);
    }

    #[test]
    fn test_open_rejects_free_text_field() {
        assert!(ChoicePickerState::open(Field::Reason, "").is_none());
    }

    #[test]
    fn test_enter_sets_selected_value() {
        let tui = TuiState::new();
        let mut picker = ChoicePickerState::open(Field::Salutation, "").unwrap();

        picker.handle_key(&tui, key(KeyCode::Down));
        picker.handle_key(&tui, key(KeyCode::Down)); // clamped at the last option
        let update = picker.handle_key(&tui, key(KeyCode::Enter));

        assert!(matches!(update.transition, OverlayTransition::Close));
        assert_eq!(
            update.mutations,
            vec![StateMutation::Form(FormMutation::SetField {
                field: Field::Salutation,
                value: "sir".to_string(),
            })]
        );
    }

    #[test]
    fn test_ctrl_c_closes_but_plain_c_does_not() {
        let tui = TuiState::new();
        let mut picker = ChoicePickerState::open(Field::TimeOfDay, "").unwrap();

        let update = picker.handle_key(&tui, key(KeyCode::Char('c')));
        assert!(matches!(update.transition, OverlayTransition::Stay));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let update = picker.handle_key(&tui, ctrl_c);
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(update.mutations.is_empty());
    }

    #[test]
    fn test_esc_closes_without_change() {
        let tui = TuiState::new();
        let mut picker = ChoicePickerState::open(Field::TimeOfDay, "").unwrap();
        let update = picker.handle_key(&tui, key(KeyCode::Esc));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(update.mutations.is_empty());
    }
}
