//! User interface components and views.
//!
//! This module contains all TUI rendering logic, including the popup views
//! and the reusable components the table screen is built from.

mod components;
pub mod theme;
mod views;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub use components::{
    column_widths, context_hints, highlight_text, page_marker, pagination_line,
    render_context_help, render_pagination, row_marker, FilterAction, FilterInput, KeyContext,
    Notification, NotificationKind, StatusLine, TableView, EMPTY_MESSAGE, MAX_COLUMN_WIDTH,
};
pub use theme::Theme;
pub use views::{DetailAction, DetailView, HelpAction, HelpView};

/// A rectangle centered in `area`, sized as a percentage of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
