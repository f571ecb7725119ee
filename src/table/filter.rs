//! Free-text filtering across filterable columns.

use super::column::{Column, TableRow};

/// Check whether a row matches an already-lowercased needle.
///
/// An empty needle matches every row. Otherwise at least one filterable
/// column's raw value, as lowercase text, must contain the needle.
pub fn row_matches<R: TableRow>(row: &R, columns: &[Column<R>], needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    columns.iter().filter(|col| col.filterable).any(|col| {
        col.raw(row)
            .as_text()
            .is_some_and(|text| text.to_lowercase().contains(needle))
    })
}

/// Return the indices of rows retained by the filter text, in data order.
pub fn filter_indices<R: TableRow>(rows: &[R], columns: &[Column<R>], filter_text: &str) -> Vec<usize> {
    let needle = filter_text.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row_matches(*row, columns, &needle))
        .map(|(i, _)| i)
        .collect()
}
