//! Warehouse stock movements.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use super::FarmTable;
use crate::table::{CellValue, Column, ColumnType, TableRow};

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MovementKind {
    /// Goods received into the warehouse.
    Income,
    /// Goods issued out of the warehouse.
    Outcome,
}

impl MovementKind {
    fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Income => "income",
            MovementKind::Outcome => "outcome",
        }
    }
}

/// One income or outcome of a warehouse item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movement {
    pub code: String,
    pub kind: MovementKind,
    pub item: String,
    pub quantity: f64,
    pub unit_cost: f64,
    pub date: NaiveDate,
    /// Supplier code for incomes.
    pub supplier: Option<String>,
}

impl TableRow for Movement {
    fn id(&self) -> &str {
        &self.code
    }

    fn value(&self, accessor: &str) -> CellValue {
        match accessor {
            "code" => CellValue::from(self.code.as_str()),
            "kind" => CellValue::from(self.kind.as_str()),
            "item" => CellValue::from(self.item.as_str()),
            "quantity" => CellValue::from(self.quantity),
            "unit_cost" => CellValue::from(self.unit_cost),
            "date" => CellValue::from(self.date),
            "supplier" => CellValue::from(self.supplier.as_deref()),
            _ => CellValue::Null,
        }
    }
}

const ITEMS: [(&str, f64); 6] = [
    ("Starter feed (kg)", 0.62),
    ("Grower feed (kg)", 0.48),
    ("Iron injection (dose)", 1.15),
    ("Ear tags (pack)", 24.0),
    ("Disinfectant (l)", 7.8),
    ("Straw bedding (bale)", 4.25),
];

impl FarmTable for Movement {
    const TITLE: &'static str = "Warehouse movements";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Code", "code").filterable(),
            Column::new("Kind", "kind")
                .filterable()
                .with_render(|_, row: &Movement| match row.kind {
                    MovementKind::Income => "▲ IN".to_string(),
                    MovementKind::Outcome => "▼ OUT".to_string(),
                }),
            Column::new("Item", "item").filterable(),
            Column::new("Qty", "quantity").with_type(ColumnType::Number),
            Column::new("Unit cost", "unit_cost").with_type(ColumnType::Currency),
            Column::new("Date", "date").with_type(ColumnType::Date),
            Column::new("Supplier", "supplier").filterable(),
        ]
    }

    fn samples() -> Vec<Self> {
        let base = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default();
        (0..23u32)
            .map(|i| {
                let (item, unit_cost) = ITEMS[(i as usize) % ITEMS.len()];
                let kind = if i % 3 == 2 {
                    MovementKind::Outcome
                } else {
                    MovementKind::Income
                };
                Movement {
                    code: format!("M-{:04}", i + 1),
                    kind,
                    item: item.to_string(),
                    quantity: f64::from(5 + (i * 97) % 1500),
                    unit_cost,
                    date: base
                        .checked_add_days(Days::new(u64::from(i * 4)))
                        .unwrap_or(base),
                    supplier: match kind {
                        MovementKind::Income => Some(format!("S-{:03}", 1 + i % 12)),
                        MovementKind::Outcome => None,
                    },
                }
            })
            .collect()
    }
}
