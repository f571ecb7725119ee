//! Status line notifications.
//!
//! Short feedback messages ("3 selected", "Selection reset") shown on a
//! single line under the table until they expire.

use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::Theme;

const DEFAULT_DURATION: Duration = Duration::from_secs(3);

/// The kind of notification, which picks its icon and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
}

impl NotificationKind {
    /// Icon shown before the message.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Info => "ℹ",
            NotificationKind::Success => "✓",
            NotificationKind::Warning => "⚠",
        }
    }

    fn style(&self, theme: &Theme) -> Style {
        match self {
            NotificationKind::Info => Style::default().fg(theme.accent),
            NotificationKind::Success => Style::default().fg(theme.selected),
            NotificationKind::Warning => Style::default().fg(theme.warning),
        }
    }
}

/// A single message with an expiry.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
    duration: Duration,
}

impl Notification {
    /// Create a notification with the default duration.
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration: DEFAULT_DURATION,
        }
    }

    /// Override how long the message stays up.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Check if the message has been shown long enough.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Holds the latest notification. A new message replaces the old one.
#[derive(Debug, Default)]
pub struct StatusLine {
    current: Option<Notification>,
}

impl StatusLine {
    /// Create an empty status line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification.
    pub fn push(&mut self, notification: Notification) {
        self.current = Some(notification);
    }

    /// Show an info message.
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, NotificationKind::Info));
    }

    /// Show a success message.
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, NotificationKind::Success));
    }

    /// Show a warning.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, NotificationKind::Warning));
    }

    /// Drop the message once it has expired. Called on every tick.
    pub fn tick(&mut self) {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
        }
    }

    /// The message currently shown.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Render the message, if any.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let Some(notification) = &self.current else {
            return;
        };
        let style = notification.kind.style(theme);
        let line = Line::from(vec![
            Span::styled(
                format!("{} ", notification.kind.icon()),
                style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(notification.message.clone(), style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_icon() {
        assert_eq!(NotificationKind::Info.icon(), "ℹ");
        assert_eq!(NotificationKind::Success.icon(), "✓");
        assert_eq!(NotificationKind::Warning.icon(), "⚠");
    }

    #[test]
    fn test_latest_message_wins() {
        let mut status = StatusLine::new();
        status.info("Sorted by Breed");
        status.success("2 selected");
        let current = status.current().unwrap();
        assert_eq!(current.message, "2 selected");
        assert_eq!(current.kind, NotificationKind::Success);
    }

    #[test]
    fn test_tick_drops_expired() {
        let mut status = StatusLine::new();
        status.push(Notification::new("gone", NotificationKind::Info).with_duration(Duration::ZERO));
        status.tick();
        assert!(status.current().is_none());
    }

    #[test]
    fn test_tick_keeps_fresh() {
        let mut status = StatusLine::new();
        status.warning("Table is read only");
        status.tick();
        assert!(status.current().is_some());
    }
}
