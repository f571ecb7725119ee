//! Table component.
//!
//! [`TableView`] draws a [`SelectableTable`] page and keeps the row and
//! column cursors in range as the page or the filtered view changes.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::filter_bar::highlight_text;
use crate::events::Command;
use crate::table::{Column, SelectableTable, SelectionMode, TableRow};
use crate::ui::theme::Theme;

/// Widest a column gets, in characters.
pub const MAX_COLUMN_WIDTH: usize = 40;

/// Shown instead of rows when the page is empty.
pub const EMPTY_MESSAGE: &str = "No data found";

const SELECTOR_WIDTH: u16 = 3;

/// Character width of each column for the given rows.
///
/// A column is as wide as its widest formatted cell, leaving room for the
/// header plus a sort indicator, capped at [`MAX_COLUMN_WIDTH`].
pub fn column_widths<R: TableRow>(columns: &[Column<R>], rows: &[&R]) -> Vec<usize> {
    columns
        .iter()
        .map(|column| {
            let header = column.header.chars().count() + 2;
            rows.iter()
                .map(|row| column.format(row).chars().count())
                .fold(header, usize::max)
                .min(MAX_COLUMN_WIDTH)
        })
        .collect()
}

/// Marker for one row's selection state.
pub fn row_marker(mode: SelectionMode, selected: bool) -> &'static str {
    match (mode, selected) {
        (SelectionMode::Multiple, true) => "[x]",
        (SelectionMode::Multiple, false) => "[ ]",
        (SelectionMode::Single, true) => "(•)",
        (SelectionMode::Single, false) => "( )",
    }
}

/// Marker for the "select all" header cell.
///
/// Empty in single mode, partially checked when some of the page is selected.
pub fn page_marker<R: TableRow + Clone>(table: &SelectableTable<R>) -> &'static str {
    if table.selection_mode() == SelectionMode::Single {
        return "";
    }
    if table.is_page_selected() {
        return "[x]";
    }
    let any = table.page_rows().iter().any(|r| table.is_selected(r.id()));
    if any {
        "[-]"
    } else {
        "[ ]"
    }
}

/// Cursor state for the table view.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    /// Row cursor within the current page.
    cursor: usize,
    /// Focused column, used for sorting.
    column: usize,
    /// View generation the cursor was placed against.
    generation: u64,
    /// Page the cursor was placed against.
    page: usize,
}

impl TableView {
    /// Create a view with the cursor on the first row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Row cursor within the page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Focused column index.
    pub fn focused_column(&self) -> usize {
        self.column
    }

    /// Id of the row under the cursor.
    pub fn focused_id<R: TableRow + Clone>(&self, table: &SelectableTable<R>) -> Option<String> {
        table
            .page_rows()
            .get(self.cursor)
            .map(|row| row.id().to_string())
    }

    /// Bring the cursors back in range after the table changed.
    ///
    /// The row cursor returns to the top when the page or the view changes.
    pub fn sync<R: TableRow + Clone>(&mut self, table: &SelectableTable<R>) {
        if self.generation != table.view_generation() || self.page != table.current_page() {
            self.generation = table.view_generation();
            self.page = table.current_page();
            self.cursor = 0;
        }
        let rows = table.page_rows().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
        self.column = self.column.min(table.columns().len().saturating_sub(1));
    }

    /// Apply a table command. Returns false if the command is not a table command.
    pub fn handle_command<R: TableRow + Clone>(
        &mut self,
        command: Command,
        table: &mut SelectableTable<R>,
    ) -> bool {
        self.sync(table);
        let rows = table.page_rows().len();

        match command {
            Command::Up => self.cursor = self.cursor.saturating_sub(1),
            Command::Down => self.cursor = (self.cursor + 1).min(rows.saturating_sub(1)),
            Command::FirstRow => self.cursor = 0,
            Command::LastRow => self.cursor = rows.saturating_sub(1),
            Command::Left => self.column = self.column.saturating_sub(1),
            Command::Right => {
                self.column = (self.column + 1).min(table.columns().len().saturating_sub(1))
            }
            Command::NextPage => table.next_page(),
            Command::PrevPage => table.prev_page(),
            Command::ToggleRow => {
                if let Some(id) = self.focused_id(table) {
                    table.toggle_row(&id);
                }
            }
            Command::ActivateRow => {
                if let Some(id) = self.focused_id(table) {
                    table.activate_row(&id);
                }
            }
            Command::SelectAll => table.toggle_select_all(),
            Command::Sort => {
                if let Some(key) = table.columns().get(self.column).map(|c| c.accessor.clone()) {
                    table.toggle_sort(&key);
                }
            }
            _ => return false,
        }

        self.sync(table);
        true
    }

    /// Render the current page.
    pub fn render<R: TableRow + Clone>(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        table: &SelectableTable<R>,
        theme: &Theme,
    ) {
        self.sync(table);

        let page = table.page_rows();
        let mode = table.selection_mode();
        let disabled = table.is_disabled();
        let filter = table.filter_text();
        let widths = column_widths(table.columns(), &page);

        let mut header_cells = vec![Cell::from(page_marker(table))];
        for (i, column) in table.columns().iter().enumerate() {
            let mut label = column.header.clone();
            if let Some(sort) = table.sort().filter(|s| s.key == column.accessor) {
                label.push(' ');
                label.push_str(sort.direction.indicator());
            }
            let mut style = theme.header();
            if i == self.column {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            header_cells.push(Cell::from(label).style(style));
        }
        let header = Row::new(header_cells).style(theme.header());

        let rows: Vec<Row> = page
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let selected = table.is_selected(row.id());
                let mut cells = vec![Cell::from(row_marker(mode, selected))];
                for column in table.columns() {
                    let text = column.format(row);
                    let line = if column.filterable && !filter.is_empty() {
                        highlight_text(&text, filter, Style::default(), theme.matched())
                    } else {
                        Line::from(text)
                    };
                    cells.push(Cell::from(line));
                }

                let mut style = if selected {
                    Style::default().fg(theme.selected)
                } else {
                    Style::default().fg(theme.fg)
                };
                if disabled {
                    style = theme.dim();
                }
                if i == self.cursor {
                    style = style.patch(theme.cursor());
                }
                Row::new(cells).style(style)
            })
            .collect();

        let mut constraints = vec![Constraint::Length(SELECTOR_WIDTH)];
        constraints.extend(widths.iter().map(|&w| Constraint::Length(w as u16)));

        let title = if disabled {
            " Records (read only) ".to_string()
        } else {
            format!(" Records ({}) ", table.filtered_count())
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(theme.dim());
        let inner = block.inner(area);

        let widget = Table::new(rows, constraints)
            .header(header)
            .block(block)
            .column_spacing(2);
        frame.render_widget(widget, area);

        if page.is_empty() && inner.height > 1 {
            let message = Paragraph::new(EMPTY_MESSAGE)
                .style(theme.dim())
                .alignment(Alignment::Center);
            frame.render_widget(message, Rect::new(inner.x, inner.y + 1, inner.width, 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::table::testing::{code_columns, code_rows, CodeRow};
    use crate::table::TableOptions;

    fn multi(rows_per_page: usize) -> SelectableTable<CodeRow> {
        let options = TableOptions {
            selection_mode: SelectionMode::Multiple,
            rows_per_page,
            ..TableOptions::default()
        };
        SelectableTable::with_options(code_columns(), code_rows(&["A", "B", "C"]), options)
    }

    fn draw(view: &mut TableView, table: &SelectableTable<CodeRow>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal
            .draw(|frame| view.render(frame, frame.area(), table, &Theme::dark()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_column_widths() {
        let columns = code_columns();
        let rows = code_rows(&["A", "LONGER-CODE"]);
        let refs: Vec<&CodeRow> = rows.iter().collect();
        assert_eq!(column_widths(&columns, &refs), vec![4, 11]);
    }

    #[test]
    fn test_row_markers() {
        assert_eq!(row_marker(SelectionMode::Multiple, true), "[x]");
        assert_eq!(row_marker(SelectionMode::Single, false), "( )");
    }

    #[test]
    fn test_page_marker_states() {
        let mut table = multi(2);
        assert_eq!(page_marker(&table), "[ ]");
        table.toggle_row("1");
        assert_eq!(page_marker(&table), "[-]");
        table.toggle_row("2");
        assert_eq!(page_marker(&table), "[x]");
    }

    #[test]
    fn test_cursor_moves_and_toggles() {
        let mut table = multi(10);
        let mut view = TableView::new();
        view.handle_command(Command::Down, &mut table);
        view.handle_command(Command::Down, &mut table);
        view.handle_command(Command::Down, &mut table);
        assert_eq!(view.cursor(), 2);
        view.handle_command(Command::ToggleRow, &mut table);
        assert_eq!(table.selected_ids(), ["3"]);
    }

    #[test]
    fn test_page_change_resets_cursor() {
        let mut table = multi(2);
        let mut view = TableView::new();
        view.handle_command(Command::Down, &mut table);
        view.handle_command(Command::NextPage, &mut table);
        assert_eq!(table.current_page(), 2);
        assert_eq!(view.cursor(), 0);
        assert_eq!(view.focused_id(&table).as_deref(), Some("3"));
    }

    #[test]
    fn test_sort_uses_focused_column() {
        let mut table = multi(10);
        let mut view = TableView::new();
        view.handle_command(Command::Right, &mut table);
        view.handle_command(Command::Right, &mut table);
        assert_eq!(view.focused_column(), 1);
        view.handle_command(Command::Sort, &mut table);
        view.handle_command(Command::Sort, &mut table);
        assert_eq!(view.focused_id(&table).as_deref(), Some("3"));
    }

    #[test]
    fn test_non_table_command() {
        let mut table = multi(10);
        let mut view = TableView::new();
        assert!(!view.handle_command(Command::Quit, &mut table));
    }

    #[test]
    fn test_render_rows_and_markers() {
        let mut table = multi(2);
        table.toggle_row("2");
        let mut view = TableView::new();
        let screen = draw(&mut view, &table);
        assert!(screen.contains("[-]"));
        assert!(screen.contains("[x]"));
        assert!(screen.contains("Code"));
        assert!(screen.contains("B"));
        assert!(!screen.contains("C "));
    }

    #[test]
    fn test_render_sort_indicator() {
        let mut table = multi(10);
        table.toggle_sort("code");
        let screen = draw(&mut TableView::new(), &table);
        assert!(screen.contains("Code ▲"));
    }

    #[test]
    fn test_render_empty() {
        let table: SelectableTable<CodeRow> = SelectableTable::new(code_columns(), Vec::new());
        let screen = draw(&mut TableView::new(), &table);
        assert!(screen.contains(EMPTY_MESSAGE));
    }
}
