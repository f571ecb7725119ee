//! Column sorting.

use std::cmp::Ordering;
use std::fmt;

use super::column::TableRow;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow shown next to a sorted column header.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// The active sort: which accessor and which direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    /// Accessor key of the sorted column.
    pub key: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortConfig {
    /// Create an ascending sort on the given key.
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Create a descending sort on the given key.
    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Compute the sort that results from clicking a column header.
    ///
    /// Clicking the sorted column flips its direction; any other column
    /// starts ascending.
    pub fn toggled(current: Option<&SortConfig>, key: &str) -> SortConfig {
        match current {
            Some(config) if config.key == key => SortConfig {
                key: config.key.clone(),
                direction: config.direction.flipped(),
            },
            _ => SortConfig::ascending(key),
        }
    }
}

/// Stable-sort row indices by the configured column's raw value.
///
/// Ties keep their relative order in both directions.
pub fn sort_indices<R: TableRow>(rows: &[R], indices: &mut [usize], config: &SortConfig) {
    indices.sort_by(|&a, &b| compare_rows(&rows[a], &rows[b], config));
}

/// Compare two rows under a sort config.
pub fn compare_rows<R: TableRow>(a: &R, b: &R, config: &SortConfig) -> Ordering {
    let ord = a.value(&config.key).compare(&b.value(&config.key));
    match config.direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::testing::{code_rows, CodeRow};

    fn codes(rows: &[CodeRow], indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| rows[i].code.clone()).collect()
    }

    #[test]
    fn test_toggle_same_column_flips() {
        let first = SortConfig::toggled(None, "code");
        assert_eq!(first, SortConfig::ascending("code"));
        let second = SortConfig::toggled(Some(&first), "code");
        assert_eq!(second, SortConfig::descending("code"));
        let third = SortConfig::toggled(Some(&second), "code");
        assert_eq!(third, SortConfig::ascending("code"));
    }

    #[test]
    fn test_toggle_new_column_starts_ascending() {
        let current = SortConfig::descending("code");
        assert_eq!(
            SortConfig::toggled(Some(&current), "id"),
            SortConfig::ascending("id")
        );
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let rows = code_rows(&["B", "C", "A"]);
        let mut indices = vec![0, 1, 2];
        sort_indices(&rows, &mut indices, &SortConfig::ascending("code"));
        assert_eq!(codes(&rows, &indices), vec!["A", "B", "C"]);
        sort_indices(&rows, &mut indices, &SortConfig::descending("code"));
        assert_eq!(codes(&rows, &indices), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let rows = code_rows(&["X", "A", "X", "A"]);
        let mut indices = vec![0, 1, 2, 3];
        sort_indices(&rows, &mut indices, &SortConfig::ascending("code"));
        assert_eq!(indices, vec![1, 3, 0, 2]);
        let mut indices = vec![0, 1, 2, 3];
        sort_indices(&rows, &mut indices, &SortConfig::descending("code"));
        assert_eq!(indices, vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_numeric_strings_sort_lexicographically() {
        let rows = code_rows(&["10", "9", "100"]);
        let mut indices = vec![0, 1, 2];
        sort_indices(&rows, &mut indices, &SortConfig::ascending("code"));
        assert_eq!(codes(&rows, &indices), vec!["10", "100", "9"]);
    }

    #[test]
    fn test_compare_rows() {
        let rows = code_rows(&["A", "B"]);
        assert_eq!(
            compare_rows(&rows[0], &rows[1], &SortConfig::descending("code")),
            Ordering::Greater
        );
    }
}
