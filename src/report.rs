//! Plain-text rendering of one table page, for `pigpen print`.

use std::fmt::Write;

use crate::table::{SelectableTable, TableRow};
use crate::ui::{column_widths, EMPTY_MESSAGE};

const GAP: &str = "  ";

/// Render the current page as aligned text columns with a footer line.
pub fn render_page<R: TableRow + Clone>(table: &SelectableTable<R>) -> String {
    let page = table.page_rows();
    let columns = table.columns();
    let widths = column_widths(columns, &page);

    let mut out = String::new();

    let headers: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| {
            let mut label = column.header.clone();
            if let Some(sort) = table.sort().filter(|s| s.key == column.accessor) {
                label.push(' ');
                label.push_str(sort.direction.indicator());
            }
            pad(&label, width)
        })
        .collect();
    push_line(&mut out, &headers);

    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_line(&mut out, &rule);

    if page.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
    }

    for row in &page {
        let cells: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| pad(&column.format(row), width))
            .collect();
        push_line(&mut out, &cells);
    }

    let _ = writeln!(
        out,
        "\nPage {} of {} · {} rows",
        table.current_page(),
        table.total_pages().max(1),
        table.filtered_count()
    );
    out
}

fn push_line(out: &mut String, cells: &[String]) {
    out.push_str(cells.join(GAP).trim_end());
    out.push('\n');
}

/// Left-align `text` in `width` characters, cutting it with an ellipsis.
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::testing::{code_columns, code_rows};
    use crate::table::TableOptions;

    #[test]
    fn test_pad() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abc…");
        assert_eq!(pad("ñu", 3), "ñu ");
    }

    #[test]
    fn test_render_page() {
        let options = TableOptions {
            rows_per_page: 2,
            ..TableOptions::default()
        };
        let mut table = SelectableTable::with_options(code_columns(), code_rows(&["A", "B", "C"]), options);
        table.toggle_sort("code");
        let text = render_page(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ID    Code ▲");
        assert_eq!(lines[1], "----  ------");
        assert_eq!(lines[2], "1     A");
        assert_eq!(lines[3], "2     B");
        assert_eq!(lines[5], "Page 1 of 2 · 3 rows");
    }

    #[test]
    fn test_render_empty_page() {
        let mut table = SelectableTable::new(code_columns(), code_rows(&["A"]));
        table.set_filter_text("nothing");
        let text = render_page(&table);
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(text.contains("Page 1 of 1 · 0 rows"));
    }
}
