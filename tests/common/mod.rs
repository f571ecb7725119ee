//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use pigpen::table::{CellValue, Column, SelectableTable, SelectionMode, TableOptions, TableRow};

/// A row with an id, a code and a numeric weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub code: String,
    pub weight: f64,
}

impl TableRow for Item {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, accessor: &str) -> CellValue {
        match accessor {
            "id" => CellValue::from(self.id.as_str()),
            "code" => CellValue::from(self.code.as_str()),
            "weight" => CellValue::from(self.weight),
            _ => CellValue::Null,
        }
    }
}

/// Items with ids "1", "2", ... and the given codes and weights.
pub fn items(rows: &[(&str, f64)]) -> Vec<Item> {
    rows.iter()
        .enumerate()
        .map(|(i, (code, weight))| Item {
            id: (i + 1).to_string(),
            code: code.to_string(),
            weight: *weight,
        })
        .collect()
}

/// The A, B, C data set.
pub fn abc() -> Vec<Item> {
    items(&[("A", 10.0), ("B", 20.0), ("C", 5.5)])
}

/// Id, filterable code and numeric weight columns.
pub fn item_columns() -> Vec<Column<Item>> {
    vec![
        Column::new("ID", "id"),
        Column::new("Code", "code").filterable(),
        Column::new("Weight", "weight").with_type(pigpen::table::ColumnType::Number),
    ]
}

/// Options for multiple selection with the given page size.
pub fn multiple(rows_per_page: usize) -> TableOptions {
    TableOptions {
        selection_mode: SelectionMode::Multiple,
        rows_per_page,
        ..TableOptions::default()
    }
}

/// Every `on_select` payload, as ids.
pub type Calls = Rc<RefCell<Vec<Vec<String>>>>;

/// A table that records every `on_select` call.
pub fn recorded(rows: Vec<Item>, options: TableOptions) -> (SelectableTable<Item>, Calls) {
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let table = SelectableTable::with_options(item_columns(), rows, options).on_select(
        move |rows: Vec<Item>| sink.borrow_mut().push(rows.into_iter().map(|r| r.id).collect()),
    );
    (table, calls)
}

/// Ids of rows, in order.
pub fn ids(rows: &[&Item]) -> Vec<String> {
    rows.iter().map(|r| r.id.clone()).collect()
}
