//! Pagination footer.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::table::{SelectableTable, TableRow};
use crate::ui::theme::Theme;

/// Footer summary, e.g. `‹ Page 2 of 3 › · 23 rows · 4 selected`.
///
/// The arrows are dimmed out when there is no page in that direction. Shows
/// only the counts when pagination is turned off.
pub fn pagination_line<R: TableRow + Clone>(
    table: &SelectableTable<R>,
    theme: &Theme,
) -> Line<'static> {
    let page = table.current_page();
    let total = table.total_pages();
    let counts = format!(
        "{} rows · {} selected",
        table.filtered_count(),
        table.selected_count()
    );

    if !table.options().show_pagination {
        return Line::from(Span::styled(counts, theme.dim()));
    }

    let arrow = |enabled: bool, symbol: &'static str| {
        if enabled {
            Span::styled(symbol, Style::default().fg(theme.accent))
        } else {
            Span::styled(symbol, theme.dim())
        }
    };

    Line::from(vec![
        arrow(page > 1, "‹ "),
        Span::styled(
            format!("Page {} of {}", page, total.max(1)),
            Style::default().fg(theme.fg),
        ),
        arrow(page < total, " ›"),
        Span::styled(format!(" · {}", counts), theme.dim()),
    ])
}

/// Render the pagination footer, right aligned.
pub fn render_pagination<R: TableRow + Clone>(
    frame: &mut Frame,
    area: Rect,
    table: &SelectableTable<R>,
    theme: &Theme,
) {
    let widget = Paragraph::new(pagination_line(table, theme)).alignment(Alignment::Right);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::testing::{code_columns, code_rows};
    use crate::table::{SelectionMode, TableOptions};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_pagination_line() {
        let options = TableOptions {
            selection_mode: SelectionMode::Multiple,
            rows_per_page: 2,
            ..TableOptions::default()
        };
        let mut table =
            crate::table::SelectableTable::with_options(code_columns(), code_rows(&["A", "B", "C"]), options);
        table.toggle_row("1");
        table.next_page();
        assert_eq!(
            text(&pagination_line(&table, &Theme::dark())),
            "‹ Page 2 of 2 › · 3 rows · 1 selected"
        );
    }

    #[test]
    fn test_empty_table_shows_page_one() {
        let table = crate::table::SelectableTable::new(code_columns(), code_rows(&[]));
        assert_eq!(
            text(&pagination_line(&table, &Theme::dark())),
            "‹ Page 1 of 1 › · 0 rows · 0 selected"
        );
    }

    #[test]
    fn test_without_pagination() {
        let options = TableOptions {
            show_pagination: false,
            ..TableOptions::default()
        };
        let table =
            crate::table::SelectableTable::with_options(code_columns(), code_rows(&["A"]), options);
        assert_eq!(
            text(&pagination_line(&table, &Theme::dark())),
            "1 rows · 0 selected"
        );
    }
}
