//! Row shape and column descriptors.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::format;
use super::value::CellValue;

/// A record that can be shown in a [`SelectableTable`](super::SelectableTable).
///
/// Rows only need a stable unique id and a way to look up a raw value by
/// accessor key. Unknown accessors return [`CellValue::Null`].
pub trait TableRow {
    /// The row's unique identifier within its data set.
    fn id(&self) -> &str;

    /// Read the raw value for an accessor key.
    fn value(&self, accessor: &str) -> CellValue;
}

/// How a column's raw values are formatted for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Plain string coercion.
    #[default]
    Text,
    /// Grouped decimal number.
    Number,
    /// Short calendar date.
    Date,
    /// US dollar amount.
    Currency,
}

/// Custom cell formatter, called with the raw value and the whole row.
pub type CellRenderer<R> = Arc<dyn Fn(&CellValue, &R) -> String + Send + Sync>;

/// Describes how to read and display one field of a row.
pub struct Column<R> {
    /// Display label.
    pub header: String,
    /// Key passed to [`TableRow::value`].
    pub accessor: String,
    /// Type-driven formatter used when no custom renderer is set.
    pub column_type: ColumnType,
    /// Whether the free-text filter searches this column.
    pub filterable: bool,
    /// Optional custom formatter; takes precedence over `column_type`.
    render: Option<CellRenderer<R>>,
}

impl<R> Column<R> {
    /// Create a text column.
    pub fn new(header: impl Into<String>, accessor: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            accessor: accessor.into(),
            column_type: ColumnType::Text,
            filterable: false,
            render: None,
        }
    }

    /// Set the column type.
    pub fn with_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = column_type;
        self
    }

    /// Mark the column as searchable by the filter text.
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Set whether the column is searchable by the filter text.
    pub fn with_filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Install a custom formatter.
    pub fn with_render<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellValue, &R) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Check if a custom formatter is installed.
    pub fn has_custom_render(&self) -> bool {
        self.render.is_some()
    }
}

impl<R: TableRow> Column<R> {
    /// Read this column's raw value from a row.
    pub fn raw(&self, row: &R) -> CellValue {
        row.value(&self.accessor)
    }

    /// Format this column's value for a row.
    pub fn format(&self, row: &R) -> String {
        let value = self.raw(row);
        match &self.render {
            Some(render) => render(&value, row),
            None => format::format_value(&value, self.column_type),
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            column_type: self.column_type,
            filterable: self.filterable,
            render: self.render.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("column_type", &self.column_type)
            .field("filterable", &self.filterable)
            .field("custom_render", &self.render.is_some())
            .finish()
    }
}
