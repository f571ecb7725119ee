//! Row selection by id.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether one or many rows may be selected at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// At most one selected row (radio semantics).
    #[default]
    Single,
    /// Any number of selected rows (checkbox semantics).
    Multiple,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Single => f.write_str("single"),
            SelectionMode::Multiple => f.write_str("multiple"),
        }
    }
}

impl FromStr for SelectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(SelectionMode::Single),
            "multiple" | "multi" => Ok(SelectionMode::Multiple),
            other => Err(format!(
                "unknown selection mode '{}' (expected 'single' or 'multiple')",
                other
            )),
        }
    }
}

/// A set of selected row ids that remembers insertion order.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Ids in the order they were selected.
    order: Vec<String>,
    /// Fast membership lookup.
    members: HashSet<String>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an id is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    /// Add an id. Returns false if it was already selected.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.members.insert(id.to_string()) {
            self.order.push(id.to_string());
            true
        } else {
            false
        }
    }

    /// Remove an id. Returns false if it was not selected.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.members.remove(id) {
            self.order.retain(|x| x != id);
            true
        } else {
            false
        }
    }

    /// Add the id if absent, remove it if present.
    pub fn toggle(&mut self, id: &str) {
        if !self.remove(id) {
            self.insert(id);
        }
    }

    /// Replace the selection with exactly one id.
    pub fn select_only(&mut self, id: &str) {
        self.clear();
        self.insert(id);
    }

    /// Drop every id but the most recently selected one.
    ///
    /// Returns true if anything was removed.
    pub fn keep_latest(&mut self) -> bool {
        if self.order.len() <= 1 {
            return false;
        }
        let latest = self.order.split_off(self.order.len() - 1);
        self.order = latest;
        self.members = self.order.iter().cloned().collect();
        true
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_remove() {
        let mut sel = Selection::new();
        assert!(sel.insert("1"));
        assert!(!sel.insert("1"));
        assert_eq!(sel.len(), 1);
        assert!(sel.remove("1"));
        assert!(!sel.remove("1"));
        assert!(sel.is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut sel = Selection::new();
        sel.toggle("a");
        assert!(sel.contains("a"));
        sel.toggle("a");
        assert!(!sel.contains("a"));
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut sel = Selection::new();
        sel.insert("3");
        sel.insert("1");
        sel.insert("2");
        sel.remove("1");
        sel.insert("1");
        assert_eq!(sel.ids(), ["3", "2", "1"]);
    }

    #[test]
    fn test_keep_latest() {
        let mut sel = Selection::new();
        assert!(!sel.keep_latest());
        sel.insert("2");
        sel.insert("7");
        sel.insert("4");
        assert!(sel.keep_latest());
        assert_eq!(sel.ids(), ["4"]);
        assert!(sel.contains("4"));
        assert!(!sel.contains("2"));
        assert!(!sel.keep_latest());
    }

    #[test]
    fn test_select_only() {
        let mut sel = Selection::new();
        sel.insert("1");
        sel.insert("2");
        sel.select_only("3");
        assert_eq!(sel.ids(), ["3"]);
    }

    #[test]
    fn test_selection_mode_from_str() {
        assert_eq!("single".parse::<SelectionMode>().unwrap(), SelectionMode::Single);
        assert_eq!(
            "Multiple".parse::<SelectionMode>().unwrap(),
            SelectionMode::Multiple
        );
        assert!("many".parse::<SelectionMode>().is_err());
    }
}
