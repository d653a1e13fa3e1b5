//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::truncate_with_ellipsis;
use crate::form::{render_copy_button, render_form};
use crate::overlays::render_utils::{InputHint, render_hints};
use crate::state::{AppState, TuiState};
use crate::toast::render_toast;

/// Maximum width of the message card.
const CARD_WIDTH: u16 = 72;

/// Height of the card: the template, room for the body line to wrap, and borders.
const CARD_HEIGHT: u16 = 13;

const BUTTON_HEIGHT: u16 = 1;
const HINT_HEIGHT: u16 = 1;
const TOAST_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let column = centered_column(area, CARD_WIDTH);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(HINT_HEIGHT),
            Constraint::Length(TOAST_HEIGHT),
            Constraint::Min(0),
        ])
        .split(column);

    render_form(frame, chunks[1], &app.tui);
    render_copy_button(frame, chunks[3], &app.tui);
    render_hint_line(frame, chunks[5], &app.tui);
    render_toast(frame, chunks[6], &app.tui.toast);

    if let Some(overlay) = &app.overlay {
        overlay.render(frame, area);
    }
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Lists what is still missing, or the key bindings once the form is complete.
fn render_hint_line(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let missing = tui.form.missing_fields();
    if missing.is_empty() {
        let hints = [
            InputHint::new("Tab", "next"),
            InputHint::new("Ctrl+Y", "copy"),
            InputHint::new("Ctrl+R", "clear"),
            InputHint::new("Esc", "quit"),
        ];
        render_hints(frame, area, &hints, Color::Cyan);
        return;
    }

    let placeholders: Vec<&str> = missing.iter().map(|f| f.placeholder()).collect();
    let text = truncate_with_ellipsis(
        &format!("Fill in: {}", placeholders.join(", ")),
        area.width as usize,
    );
    let line = Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use absence_core::form::Field;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_form_lists_missing_fields() {
        let screen = draw(&AppState::new());
        assert!(screen.contains("Absence Message Generator"));
        assert!(screen.contains("Fill in: morning/afternoon/evening"));
    }

    #[test]
    fn test_complete_form_shows_key_hints() {
        let mut app = AppState::new();
        for (field, value) in [
            (Field::TimeOfDay, "evening"),
            (Field::Salutation, "sir"),
            (Field::Subject, "Physics"),
            (Field::Reason, "of a family function"),
            (Field::Name, "Ravi"),
            (Field::RollNo, "12"),
        ] {
            app.tui.form.update(field, value);
        }

        let screen = draw(&app);
        assert!(!screen.contains("Fill in:"));
        assert!(screen.contains("Ctrl+Y"));
        assert!(screen.contains("Copy Message"));
    }

    #[test]
    fn test_render_survives_tiny_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        terminal
            .draw(|frame| render(&AppState::new(), frame))
            .unwrap();
    }
}
