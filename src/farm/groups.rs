//! Pen groups.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use super::FarmTable;
use crate::table::{CellValue, Column, ColumnType, TableRow};

/// A group of animals housed together in one pen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PigGroup {
    pub code: String,
    pub name: String,
    pub pen: String,
    pub head_count: u32,
    pub created: NaiveDate,
}

impl TableRow for PigGroup {
    fn id(&self) -> &str {
        &self.code
    }

    fn value(&self, accessor: &str) -> CellValue {
        match accessor {
            "code" => CellValue::from(self.code.as_str()),
            "name" => CellValue::from(self.name.as_str()),
            "pen" => CellValue::from(self.pen.as_str()),
            "head_count" => CellValue::from(self.head_count),
            "created" => CellValue::from(self.created),
            _ => CellValue::Null,
        }
    }
}

const PURPOSES: [&str; 4] = ["Farrowing", "Nursery", "Fattening", "Breeding"];

impl FarmTable for PigGroup {
    const TITLE: &'static str = "Groups";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Code", "code").filterable(),
            Column::new("Name", "name").filterable(),
            Column::new("Pen", "pen").filterable(),
            Column::new("Head count", "head_count").with_type(ColumnType::Number),
            Column::new("Created", "created").with_type(ColumnType::Date),
        ]
    }

    fn samples() -> Vec<Self> {
        let base = NaiveDate::from_ymd_opt(2023, 9, 4).unwrap_or_default();
        (0..14u32)
            .map(|i| {
                let purpose = PURPOSES[(i as usize) % PURPOSES.len()];
                PigGroup {
                    code: format!("G-{:02}", i + 1),
                    name: format!("{} batch {}", purpose, i / 4 + 1),
                    pen: format!("{}-{}", ['A', 'B', 'C'][(i % 3) as usize], 1 + i % 4),
                    head_count: 8 + (i * 11) % 40,
                    created: base
                        .checked_add_days(Days::new(u64::from(i * 21)))
                        .unwrap_or(base),
                }
            })
            .collect()
    }
}
