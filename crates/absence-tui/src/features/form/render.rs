//! The form card: the message template with its fields rendered inline.

use absence_core::form::Field;
use absence_core::message::capitalize_first;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use super::Focus;
use crate::state::TuiState;

const CARD_TITLE: &str = "Absence Message Generator";

/// Renders the template card with inline, editable fields.
pub fn render_form(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let text_style = Style::default().fg(Color::White);
    let plain = |s: &'static str| Span::styled(s, text_style);

    let mut greeting = vec![plain("Good ")];
    greeting.extend(field_spans(tui, Field::TimeOfDay, false));
    greeting.push(plain(" "));
    greeting.extend(field_spans(tui, Field::Salutation, false));
    greeting.push(plain("."));

    // Second use of the salutation mirrors the selector, capitalized
    let mut body = field_spans(tui, Field::Salutation, true);
    body.push(plain(" I was unable to attend today's "));
    body.extend(field_spans(tui, Field::Subject, false));
    body.push(plain(" class as "));
    body.extend(field_spans(tui, Field::Reason, false));
    body.push(plain("."));

    let lines = vec![
        Line::from(greeting),
        Line::default(),
        Line::from(body),
        Line::default(),
        Line::from(plain(
            "Humbly request you to please mark my attendance for the same.",
        )),
        Line::default(),
        Line::from(plain("Best regards")),
        Line::from(field_spans(tui, Field::Name, false)),
        Line::from(field_spans(tui, Field::RollNo, false)),
    ];

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {CARD_TITLE} "))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn field_spans(tui: &TuiState, field: Field, mirrored: bool) -> Vec<Span<'static>> {
    let focused = !mirrored && tui.focus == Focus::Field(field);
    let value = tui.form.get(field);
    let is_set = !value.trim().is_empty();

    let text = match (is_set, mirrored) {
        (true, true) => capitalize_first(value),
        (true, false) => value.to_string(),
        (false, _) => field.placeholder().to_string(),
    };

    let mut style = if is_set {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    };
    if focused {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
    }

    let marker = Style::default().fg(Color::Yellow);
    let mut spans = Vec::with_capacity(3);
    if !focused {
        spans.push(Span::styled(text, style));
    } else if field.is_choice() {
        spans.push(Span::styled("‹ ", marker));
        spans.push(Span::styled(text, style));
        spans.push(Span::styled(" ›", marker));
    } else if is_set {
        spans.push(Span::styled(text, style));
        spans.push(Span::styled("█", marker));
    } else {
        spans.push(Span::styled("█", marker));
        spans.push(Span::styled(text, style));
    }
    spans
}

/// Renders the copy button, dimmed while the form can't be exported.
pub fn render_copy_button(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let enabled = tui.can_export();
    let focused = tui.focus == Focus::CopyButton;

    let label = if tui.exporter.is_copied() {
        "  ✓ Copied  "
    } else if tui.exporter.is_pending() {
        "  Copying…  "
    } else {
        "  ⧉ Copy Message  "
    };

    let mut style = if enabled {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).bg(Color::Black)
    };
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let line = Line::from(Span::styled(label, style));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
