//! Shared fixtures for table unit tests.

use super::column::{Column, TableRow};
use super::value::CellValue;

/// A minimal row with an id and a code.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeRow {
    pub id: String,
    pub code: String,
}

impl TableRow for CodeRow {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, accessor: &str) -> CellValue {
        match accessor {
            "id" => CellValue::from(self.id.as_str()),
            "code" => CellValue::from(self.code.as_str()),
            _ => CellValue::Null,
        }
    }
}

/// Rows with ids "1", "2", ... and the given codes.
pub fn code_rows(codes: &[&str]) -> Vec<CodeRow> {
    codes
        .iter()
        .enumerate()
        .map(|(i, code)| CodeRow {
            id: (i + 1).to_string(),
            code: code.to_string(),
        })
        .collect()
}

/// An id column and a filterable code column.
pub fn code_columns() -> Vec<Column<CodeRow>> {
    vec![Column::new("ID", "id"), Column::new("Code", "code").filterable()]
}
