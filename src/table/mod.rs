//! Generic selectable data table.
//!
//! This module holds the UI-independent table model: raw cell values,
//! column descriptors, formatting, filtering, sorting, pagination and
//! selection. The terminal frontend in [`crate::ui`] renders it.

mod column;
pub mod filter;
pub mod format;
mod pagination;
mod selection;
pub mod sort;
mod state;
mod value;

#[cfg(test)]
pub(crate) mod testing;

pub use column::{CellRenderer, Column, ColumnType, TableRow};
pub use pagination::{Pagination, DEFAULT_ROWS_PER_PAGE};
pub use selection::{Selection, SelectionMode};
pub use sort::{SortConfig, SortDirection};
pub use state::{RowClickHandler, SelectHandler, SelectableTable, TableOptions};
pub use value::CellValue;
