//! Transient notification line.

use std::time::{Duration, Instant};

use absence_core::export::{Notification, NotificationKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::truncate_with_ellipsis;

/// How long a notification stays on screen unless replaced.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
struct Toast {
    notification: Notification,
    expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct ToastState {
    current: Option<Toast>,
}

impl ToastState {
    /// Shows `notification`, replacing whatever is on screen.
    pub fn show(&mut self, notification: Notification, now: Instant) {
        self.current = Some(Toast {
            notification,
            expires_at: now + TOAST_DURATION,
        });
    }

    /// Drops the toast once it has expired. Returns true if it was dropped.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn visible(&self) -> Option<&Notification> {
        self.current.as_ref().map(|t| &t.notification)
    }
}

pub fn render_toast(frame: &mut Frame, area: Rect, toast: &ToastState) {
    let Some(notification) = toast.visible() else {
        return;
    };

    let (icon, color) = match notification.kind {
        NotificationKind::Success => ("✓", Color::Green),
        NotificationKind::Error => ("✗", Color::Red),
    };
    let max_width = (area.width as usize).saturating_sub(2);
    let text = truncate_with_ellipsis(&format!("{icon} {}", notification.message), max_width);

    let line = Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_duration() {
        let now = Instant::now();
        let mut toast = ToastState::default();
        toast.show(Notification::success("copied"), now);

        assert!(!toast.expire(now + Duration::from_millis(2999)));
        assert!(toast.visible().is_some());

        assert!(toast.expire(now + TOAST_DURATION));
        assert!(toast.visible().is_none());
    }

    #[test]
    fn test_new_toast_replaces_old() {
        let now = Instant::now();
        let mut toast = ToastState::default();
        toast.show(Notification::success("copied"), now);
        toast.show(Notification::error("failed"), now + Duration::from_secs(2));

        assert_eq!(toast.visible(), Some(&Notification::error("failed")));
        // the replacement gets its own full window
        assert!(!toast.expire(now + Duration::from_secs(4)));
    }
}
