//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Instant;

use absence_core::clipboard::ClipboardError;
use absence_core::export::{COPY_FEEDBACK_DURATION, ExportId};
use absence_core::message;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::form::{self, FormAction};
use crate::mutations::{FormMutation, StateMutation};
use crate::overlays::{ChoicePickerState, Overlay, OverlayTransition};
use crate::state::{AppState, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.toast.expire(Instant::now());
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::ClipboardWritten { export, result } => {
            handle_clipboard_written(&mut app.tui, export, result)
        }
        UiEvent::CopyResetElapsed { ticket } => {
            if app.tui.exporter.reset_elapsed(ticket) {
                tracing::debug!("copy feedback reset");
            }
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if app.overlay.is_none() {
                form::handle_paste(&mut app.tui, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if let Some(overlay) = &mut app.overlay {
        let update = overlay.handle_key(&app.tui, key);
        if matches!(update.transition, OverlayTransition::Close) {
            app.overlay = None;
        }
        apply_mutations(&mut app.tui, update.mutations);
        return vec![];
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return quit(&mut app.tui),
        KeyCode::Char('c') if ctrl => return quit(&mut app.tui),
        KeyCode::Char('y') if ctrl => return trigger_export(&mut app.tui),
        KeyCode::Char('r') if ctrl => {
            app.tui.form.clear();
            return vec![];
        }
        _ => {}
    }

    match form::handle_key(&mut app.tui, key) {
        FormAction::None => vec![],
        FormAction::Export => trigger_export(&mut app.tui),
        FormAction::OpenPicker(field) => {
            if let Some(picker) = ChoicePickerState::open(field, app.tui.form.get(field)) {
                app.overlay = Some(Overlay::ChoicePicker(picker));
            }
            vec![]
        }
    }
}

fn quit(tui: &mut TuiState) -> Vec<UiEffect> {
    tui.should_quit = true;
    vec![UiEffect::Quit]
}

/// Composes the message and asks the runtime to copy it.
///
/// A no-op while the form is incomplete (the button is disabled) or while a
/// previous write is still pending.
pub fn trigger_export(tui: &mut TuiState) -> Vec<UiEffect> {
    if !tui.can_export() {
        return vec![];
    }
    let Ok(text) = message::compose(tui.form.data()) else {
        return vec![];
    };
    let Some(export) = tui.exporter.begin_export() else {
        return vec![];
    };
    vec![UiEffect::CopyToClipboard { export, text }]
}

fn handle_clipboard_written(
    tui: &mut TuiState,
    export: ExportId,
    result: Result<(), ClipboardError>,
) -> Vec<UiEffect> {
    let Some(outcome) = tui.exporter.finish_export(export, result) else {
        return vec![];
    };
    tui.toast.show(outcome.notification, Instant::now());

    outcome
        .schedule_reset
        .map(|ticket| UiEffect::ScheduleCopyReset {
            ticket,
            after: COPY_FEEDBACK_DURATION,
        })
        .into_iter()
        .collect()
}

pub fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::Form(FormMutation::SetField { field, value }) => {
                tui.form.update(field, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use absence_core::export::{COPY_FAILURE_MESSAGE, COPY_SUCCESS_MESSAGE, NotificationKind};
    use absence_core::form::Field;

    use super::*;
    use crate::form::Focus;

    fn press(app: &mut AppState, code: KeyCode, modifiers: KeyModifiers) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, modifiers))),
        )
    }

    fn scenario_a(app: &mut AppState) {
        let form = &mut app.tui.form;
        form.update(Field::TimeOfDay, "morning");
        form.update(Field::Salutation, "ma'am");
        form.update(Field::Subject, "Math");
        form.update(Field::Reason, "I was sick");
        form.update(Field::Name, "Asha Rao");
        form.update(Field::RollNo, "21CS045");
    }

    fn copy(app: &mut AppState) -> (ExportId, String) {
        let effects = press(app, KeyCode::Char('y'), KeyModifiers::CONTROL);
        match effects.as_slice() {
            [UiEffect::CopyToClipboard { export, text }] => (*export, text.clone()),
            other => panic!("expected a clipboard write, got {other:?}"),
        }
    }

    fn written(app: &mut AppState, export: ExportId, ok: bool) -> Vec<UiEffect> {
        let result = if ok {
            Ok(())
        } else {
            Err(ClipboardError::System("denied".into()))
        };
        update(app, UiEvent::ClipboardWritten { export, result })
    }

    #[test]
    fn test_complete_form_exports_composed_message() {
        let mut app = AppState::new();
        scenario_a(&mut app);

        let (_, text) = copy(&mut app);
        assert_eq!(text, message::compose(app.tui.form.data()).unwrap());
        assert!(text.starts_with("Good morning ma'am.\n\nMa'am I was unable"));
    }

    #[test]
    fn test_incomplete_form_does_not_export() {
        let mut app = AppState::new();
        scenario_a(&mut app);
        app.tui.form.update(Field::Reason, "");

        assert!(!app.tui.can_export());
        assert!(press(&mut app, KeyCode::Char('y'), KeyModifiers::CONTROL).is_empty());

        app.tui.focus = Focus::CopyButton;
        assert!(press(&mut app, KeyCode::Enter, KeyModifiers::NONE).is_empty());
        assert!(!app.tui.exporter.is_pending());
    }

    #[test]
    fn test_successful_copy_notifies_and_schedules_reset() {
        let mut app = AppState::new();
        scenario_a(&mut app);
        let (export, _) = copy(&mut app);

        let effects = written(&mut app, export, true);
        let [UiEffect::ScheduleCopyReset { ticket, after }] = effects.as_slice() else {
            panic!("expected a reset to be scheduled, got {effects:?}");
        };
        assert_eq!(*after, COPY_FEEDBACK_DURATION);
        assert!(app.tui.exporter.is_copied());
        let toast = app.tui.toast.visible().unwrap();
        assert_eq!(toast.kind, NotificationKind::Success);
        assert_eq!(toast.message, COPY_SUCCESS_MESSAGE);

        update(&mut app, UiEvent::CopyResetElapsed { ticket: *ticket });
        assert!(!app.tui.exporter.is_copied());
    }

    #[test]
    fn test_failed_copy_notifies_and_keeps_state() {
        let mut app = AppState::new();
        scenario_a(&mut app);
        let (export, _) = copy(&mut app);

        let effects = written(&mut app, export, false);
        assert!(effects.is_empty());
        assert!(!app.tui.exporter.is_copied());
        let toast = app.tui.toast.visible().unwrap();
        assert_eq!(toast.kind, NotificationKind::Error);
        assert_eq!(toast.message, COPY_FAILURE_MESSAGE);

        // not retried, and the button works again
        assert!(!app.tui.exporter.is_pending());
        copy(&mut app);
    }

    #[test]
    fn test_second_copy_supersedes_first_reset() {
        let mut app = AppState::new();
        scenario_a(&mut app);

        let (first, _) = copy(&mut app);
        let first_reset = written(&mut app, first, true);
        let (second, _) = copy(&mut app);
        let second_reset = written(&mut app, second, true);

        let (
            [UiEffect::ScheduleCopyReset { ticket: old, .. }],
            [UiEffect::ScheduleCopyReset { ticket: new, .. }],
        ) = (first_reset.as_slice(), second_reset.as_slice())
        else {
            panic!("expected two scheduled resets");
        };

        update(&mut app, UiEvent::CopyResetElapsed { ticket: *old });
        assert!(app.tui.exporter.is_copied());

        update(&mut app, UiEvent::CopyResetElapsed { ticket: *new });
        assert!(!app.tui.exporter.is_copied());
    }

    #[test]
    fn test_copy_ignored_while_write_pending() {
        let mut app = AppState::new();
        scenario_a(&mut app);
        copy(&mut app);
        assert!(press(&mut app, KeyCode::Char('y'), KeyModifiers::CONTROL).is_empty());
    }

    #[test]
    fn test_picker_sets_choice_field() {
        let mut app = AppState::new();
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(matches!(app.overlay, Some(Overlay::ChoicePicker(_))));

        press(&mut app, KeyCode::Down, KeyModifiers::NONE);
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        assert!(app.overlay.is_none());
        assert_eq!(app.tui.form.get(Field::TimeOfDay), "afternoon");
    }

    #[test]
    fn test_esc_closes_overlay_before_quitting() {
        let mut app = AppState::new();
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.overlay.is_none());
        assert!(!app.tui.should_quit);

        let effects = press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(effects, vec![UiEffect::Quit]);
        assert!(app.tui.should_quit);
    }

    #[test]
    fn test_ctrl_r_clears_form_but_not_copied_flag() {
        let mut app = AppState::new();
        scenario_a(&mut app);
        let (export, _) = copy(&mut app);
        written(&mut app, export, true);

        press(&mut app, KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(app.tui.form.missing_fields().len(), 6);
        assert!(app.tui.exporter.is_copied());
    }

    #[test]
    fn test_typing_through_reducer() {
        let mut app = AppState::new();
        app.tui.focus = Focus::Field(Field::Name);
        for c in "Asha".chars() {
            press(&mut app, KeyCode::Char(c), KeyModifiers::NONE);
        }
        update(&mut app, UiEvent::Terminal(Event::Paste(" Rao".to_string())));
        assert_eq!(app.tui.form.get(Field::Name), "Asha Rao");
    }
}
