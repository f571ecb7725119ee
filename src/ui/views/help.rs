//! Help panel view displaying keyboard shortcuts.
//!
//! Opened with '?' and closed with '?', 'q', or Escape. Scrolls when the
//! terminal is too short to show every binding.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::ui::theme::Theme;

/// Actions that can be returned from the help view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpAction {
    /// Close the help panel.
    Close,
}

type Section = (&'static str, &'static [(&'static str, &'static str)]);

const SECTIONS: &[Section] = &[
    (
        "Navigation",
        &[
            ("j / ↓", "Next row"),
            ("k / ↑", "Previous row"),
            ("h / ←", "Previous column"),
            ("l / →", "Next column"),
            ("g / Home", "First row on page"),
            ("G / End", "Last row on page"),
            ("n / PgDn", "Next page"),
            ("p / PgUp", "Previous page"),
        ],
    ),
    (
        "Selection",
        &[
            ("Space", "Select or deselect the row"),
            ("Enter", "Open the row (or select it)"),
            ("a", "Select or clear the whole page"),
            ("r", "Reset the selection"),
        ],
    ),
    (
        "Filter and sort",
        &[
            ("s", "Sort by the focused column"),
            ("/", "Edit the filter"),
            ("Esc", "Clear the filter"),
        ],
    ),
    ("General", &[("?", "Toggle this help"), ("q / Ctrl+C", "Quit")]),
];

/// The help panel view.
#[derive(Debug, Default)]
pub struct HelpView {
    /// Current scroll position.
    scroll: usize,
    /// Visible height (updated on render).
    visible_height: usize,
}

impl HelpView {
    /// Create a new help view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset scroll position to top.
    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    fn total_lines() -> usize {
        // Header and blank line per section, one per binding, trailing blank, footer.
        SECTIONS.iter().map(|(_, b)| b.len() + 3).sum::<usize>() + 1
    }

    fn max_scroll(&self) -> usize {
        Self::total_lines().saturating_sub(self.visible_height)
    }

    /// Handle keyboard input for the help view.
    pub fn handle_input(&mut self, key_event: KeyEvent) -> Option<HelpAction> {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('?'), _) | (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => {
                Some(HelpAction::Close)
            }
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
                None
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => {
                self.scroll = 0;
                None
            }
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => {
                self.scroll = self.max_scroll();
                None
            }
            _ => None,
        }
    }

    /// Render the help view.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" pigpen keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.visible_height = inner.height as usize;
        self.scroll = self.scroll.min(self.max_scroll());

        let paragraph = Paragraph::new(build_content_lines(theme)).scroll((self.scroll as u16, 0));
        frame.render_widget(paragraph, inner);

        if Self::total_lines() > self.visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"));
            let mut state = ScrollbarState::new(self.max_scroll()).position(self.scroll);
            let scrollbar_area = Rect::new(
                area.x + area.width.saturating_sub(1),
                area.y + 1,
                1,
                area.height.saturating_sub(2),
            );
            frame.render_stateful_widget(scrollbar, scrollbar_area, &mut state);
        }
    }
}

fn build_content_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (title, bindings) in SECTIONS {
        lines.push(Line::from(Span::styled(
            format!("── {} ──", title),
            Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        for (key, description) in bindings.iter() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>12}", key),
                    Style::default().fg(theme.selected).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(*description),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Press ?, q, or Esc to close",
        theme.dim(),
    )));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(view: &mut HelpView, code: KeyCode) -> Option<HelpAction> {
        view.handle_input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_close_keys() {
        let mut view = HelpView::new();
        assert_eq!(press(&mut view, KeyCode::Char('?')), Some(HelpAction::Close));
        assert_eq!(press(&mut view, KeyCode::Char('q')), Some(HelpAction::Close));
        assert_eq!(press(&mut view, KeyCode::Esc), Some(HelpAction::Close));
    }

    #[test]
    fn test_scroll_bounds() {
        let mut view = HelpView::new();
        view.visible_height = 10;
        for _ in 0..200 {
            press(&mut view, KeyCode::Char('j'));
        }
        assert_eq!(view.scroll, view.max_scroll());
        for _ in 0..200 {
            press(&mut view, KeyCode::Char('k'));
        }
        assert_eq!(view.scroll, 0);
    }

    #[test]
    fn test_no_scroll_when_everything_fits() {
        let mut view = HelpView::new();
        view.visible_height = 100;
        press(&mut view, KeyCode::Char('j'));
        assert_eq!(view.scroll, 0);
    }

    #[test]
    fn test_content_line_count() {
        assert_eq!(build_content_lines(&Theme::dark()).len(), HelpView::total_lines());
    }

    #[test]
    fn test_reset_scroll() {
        let mut view = HelpView::new();
        view.scroll = 4;
        view.reset_scroll();
        assert_eq!(view.scroll, 0);
    }
}
