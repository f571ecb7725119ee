//! Warehouse suppliers.

use serde::Serialize;

use super::FarmTable;
use crate::table::{CellValue, Column, ColumnType, TableRow};

/// A company the warehouse buys feed, medicine or equipment from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Supplier {
    pub code: String,
    pub name: String,
    pub contact: Option<String>,
    pub city: String,
    /// Outstanding balance owed to the supplier, in USD.
    pub balance: f64,
}

impl TableRow for Supplier {
    fn id(&self) -> &str {
        &self.code
    }

    fn value(&self, accessor: &str) -> CellValue {
        match accessor {
            "code" => CellValue::from(self.code.as_str()),
            "name" => CellValue::from(self.name.as_str()),
            "contact" => CellValue::from(self.contact.as_deref()),
            "city" => CellValue::from(self.city.as_str()),
            "balance" => CellValue::from(self.balance),
            _ => CellValue::Null,
        }
    }
}

const SUPPLIERS: [(&str, Option<&str>, &str); 12] = [
    ("Agro Feeds", Some("Marta Ruiz"), "Fresno"),
    ("Prairie Grain Co", Some("Tom Becker"), "Des Moines"),
    ("VetPharm Distribution", Some("Ana Lima"), "Omaha"),
    ("Hog Equipment Ltd", None, "Sioux Falls"),
    ("Midwest Minerals", Some("Lee Park"), "Ames"),
    ("BioSecure Supplies", Some("Ravi Shah"), "Lincoln"),
    ("Golden Corn Traders", None, "Topeka"),
    ("FarmTech Parts", Some("Jo Nakamura"), "Fargo"),
    ("Clean Barn Chemicals", Some("Sam Ortiz"), "Wichita"),
    ("Genetics Plus", Some("Eva Novak"), "Madison"),
    ("Soy Protein Inc", None, "Peoria"),
    ("Northern Bedding", Some("Kim Berg"), "Duluth"),
];

impl FarmTable for Supplier {
    const TITLE: &'static str = "Suppliers";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Code", "code").filterable(),
            Column::new("Name", "name").filterable(),
            Column::new("Contact", "contact").filterable(),
            Column::new("City", "city").filterable(),
            Column::new("Balance", "balance").with_type(ColumnType::Currency),
        ]
    }

    fn samples() -> Vec<Self> {
        SUPPLIERS
            .iter()
            .enumerate()
            .map(|(i, (name, contact, city))| Supplier {
                code: format!("S-{:03}", i + 1),
                name: name.to_string(),
                contact: contact.map(str::to_string),
                city: city.to_string(),
                balance: ((i * 1733) % 9000) as f64 + if i % 2 == 0 { 0.5 } else { 0.0 },
            })
            .collect()
    }
}
