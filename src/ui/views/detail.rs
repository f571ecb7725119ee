//! Row detail popup.
//!
//! Shown when a clickable row is activated: every column's header next to the
//! formatted value for that row.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::table::{Column, TableRow};
use crate::ui::theme::Theme;

/// Actions returned from the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailAction {
    Close,
}

/// The row detail popup. Holds the id of the row on display.
#[derive(Debug, Clone, Default)]
pub struct DetailView {
    row_id: Option<String>,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a row.
    pub fn show(&mut self, id: impl Into<String>) {
        self.row_id = Some(id.into());
    }

    /// Hide the popup.
    pub fn hide(&mut self) {
        self.row_id = None;
    }

    /// Id of the row on display.
    pub fn row_id(&self) -> Option<&str> {
        self.row_id.as_deref()
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<DetailAction> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                self.hide();
                Some(DetailAction::Close)
            }
            _ => None,
        }
    }

    /// Render the popup for `row`.
    pub fn render<R: TableRow>(
        &self,
        frame: &mut Frame,
        area: Rect,
        columns: &[Column<R>],
        row: &R,
        theme: &Theme,
    ) {
        frame.render_widget(Clear, area);

        let label_width = columns
            .iter()
            .map(|c| c.header.chars().count())
            .max()
            .unwrap_or(0);

        let lines: Vec<Line> = columns
            .iter()
            .map(|column| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>width$}", column.header, width = label_width),
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(column.format(row), Style::default().fg(theme.fg)),
                ])
            })
            .collect();

        let block = Block::default()
            .title(format!(" {} ", row.id()))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent));

        let widget = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(widget, area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::farm::{FarmTable, Supplier};

    #[test]
    fn test_show_and_close() {
        let mut view = DetailView::new();
        view.show("S-001");
        assert_eq!(view.row_id(), Some("S-001"));
        let action = view.handle_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(action, Some(DetailAction::Close));
        assert!(view.row_id().is_none());
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut view = DetailView::new();
        view.show("S-001");
        assert!(view
            .handle_input(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE))
            .is_none());
        assert!(view.row_id().is_some());
    }

    #[test]
    fn test_render_formatted_values() {
        let suppliers = Supplier::samples();
        let columns = Supplier::columns();
        let row = &suppliers[1];
        let mut view = DetailView::new();
        view.show(row.id());

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| view.render(frame, frame.area(), &columns, row, &Theme::dark()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(screen.contains(row.id()));
        assert!(screen.contains("$1,733.00"));
    }
}
