//! Dataset files.
//!
//! A dataset is a JSON document holding column descriptors and rows:
//!
//! ```json
//! {
//!   "title": "Suppliers",
//!   "columns": [
//!     { "header": "Code", "accessor": "id", "filterable": true },
//!     { "header": "Balance", "accessor": "balance", "type": "currency" }
//!   ],
//!   "rows": [ { "id": "S-001", "balance": 1250.5 } ]
//! }
//! ```

pub mod error;
mod record;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use error::{DatasetError, Result};
pub use record::Record;

use crate::table::{Column, ColumnType, TableRow};

/// A column as written in a dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Display label.
    pub header: String,
    /// Field name (or dotted path) read from each row.
    pub accessor: String,
    /// Formatter tag.
    #[serde(rename = "type", default)]
    pub column_type: ColumnType,
    /// Whether the free-text filter searches this column.
    #[serde(default)]
    pub filterable: bool,
}

impl ColumnSpec {
    /// Build a table column for JSON records.
    pub fn to_column(&self) -> Column<Record> {
        Column::new(&self.header, &self.accessor)
            .with_type(self.column_type)
            .with_filterable(self.filterable)
    }
}

/// On-disk layout of a dataset file.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    title: Option<String>,
    columns: Vec<ColumnSpec>,
    #[serde(default)]
    rows: Vec<serde_json::Map<String, serde_json::Value>>,
}

/// A validated dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Title shown in the header.
    pub title: String,
    /// Column descriptors in display order.
    pub columns: Vec<ColumnSpec>,
    /// Rows with unique ids.
    pub rows: Vec<Record>,
}

impl Dataset {
    /// Load and validate a dataset file.
    ///
    /// The title defaults to the file stem when the file has none.
    pub fn load(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "Loading dataset");
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let default_title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Dataset".to_string());
        Self::from_json(&content, &default_title)
    }

    /// Parse and validate dataset JSON.
    pub fn from_json(content: &str, default_title: &str) -> Result<Self> {
        let file: DatasetFile = serde_json::from_str(content)?;

        if file.columns.is_empty() {
            return Err(DatasetError::NoColumns);
        }

        let mut seen = HashSet::new();
        let mut rows = Vec::with_capacity(file.rows.len());
        for (index, fields) in file.rows.into_iter().enumerate() {
            let record = Record::from_fields(fields).ok_or(DatasetError::MissingId(index))?;
            if !seen.insert(record.id().to_string()) {
                return Err(DatasetError::DuplicateId(record.id().to_string()));
            }
            rows.push(record);
        }

        debug!(
            columns = file.columns.len(),
            rows = rows.len(),
            "Dataset parsed"
        );

        Ok(Self {
            title: file.title.unwrap_or_else(|| default_title.to_string()),
            columns: file.columns,
            rows,
        })
    }

    /// Table columns for this dataset.
    pub fn table_columns(&self) -> Vec<Column<Record>> {
        self.columns.iter().map(ColumnSpec::to_column).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUPPLIERS: &str = r#"{
        "title": "Suppliers",
        "columns": [
            { "header": "Code", "accessor": "id", "filterable": true },
            { "header": "Name", "accessor": "name", "filterable": true },
            { "header": "Balance", "accessor": "balance", "type": "currency" }
        ],
        "rows": [
            { "id": "S-001", "name": "Agro Feeds", "balance": 1250.5 },
            { "id": 2, "name": "Vet Supply" }
        ]
    }"#;

    #[test]
    fn test_parse_dataset() {
        let ds = Dataset::from_json(SUPPLIERS, "fallback").unwrap();
        assert_eq!(ds.title, "Suppliers");
        assert_eq!(ds.columns.len(), 3);
        assert_eq!(ds.columns[2].column_type, ColumnType::Currency);
        assert!(!ds.columns[2].filterable);
        assert_eq!(ds.rows.len(), 2);
        assert_eq!(ds.rows[1].id(), "2");
    }

    #[test]
    fn test_table_columns_format() {
        let ds = Dataset::from_json(SUPPLIERS, "fallback").unwrap();
        let cols = ds.table_columns();
        assert_eq!(cols[2].format(&ds.rows[0]), "$1,250.50");
        assert_eq!(cols[2].format(&ds.rows[1]), "");
    }

    #[test]
    fn test_default_title() {
        let json = r#"{ "columns": [ { "header": "ID", "accessor": "id" } ] }"#;
        let ds = Dataset::from_json(json, "pens").unwrap();
        assert_eq!(ds.title, "pens");
        assert!(ds.rows.is_empty());
    }

    #[test]
    fn test_no_columns() {
        let json = r#"{ "columns": [], "rows": [] }"#;
        assert!(matches!(
            Dataset::from_json(json, "x"),
            Err(DatasetError::NoColumns)
        ));
    }

    #[test]
    fn test_missing_id() {
        let json = r#"{ "columns": [ { "header": "N", "accessor": "n" } ], "rows": [ { "n": 1 } ] }"#;
        assert!(matches!(
            Dataset::from_json(json, "x"),
            Err(DatasetError::MissingId(0))
        ));
    }

    #[test]
    fn test_duplicate_id() {
        let json = r#"{ "columns": [ { "header": "N", "accessor": "n" } ],
                        "rows": [ { "id": "a" }, { "id": "a" } ] }"#;
        match Dataset::from_json(json, "x") {
            Err(DatasetError::DuplicateId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Dataset::from_json("not json", "x"),
            Err(DatasetError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suppliers.json");
        fs::write(&path, SUPPLIERS).unwrap();
        let ds = Dataset::load(&path).unwrap();
        assert_eq!(ds.rows.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Read { .. }));
    }
}
