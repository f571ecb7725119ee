//! Built-in farm and warehouse record sets.
//!
//! These are typed rows for the record kinds the farm back office works
//! with: pigs, pen groups, suppliers and warehouse stock movements. Each kind
//! ships its own column layout and a deterministic sample data set.

mod groups;
mod movements;
mod pigs;
mod suppliers;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub use groups::PigGroup;
pub use movements::{Movement, MovementKind};
pub use pigs::{Pig, PigStatus, Sex, Stage};
pub use suppliers::Supplier;

use crate::dataset::DatasetError;
use crate::table::{Column, TableRow};

/// A typed record kind that can be browsed in the table.
pub trait FarmTable: TableRow + Clone + Serialize + 'static {
    /// Title shown in the header.
    const TITLE: &'static str;

    /// Column layout for this record kind.
    fn columns() -> Vec<Column<Self>>;

    /// Deterministic sample records.
    fn samples() -> Vec<Self>;
}

/// The built-in record sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSet {
    /// Individual animals.
    Pigs,
    /// Pen groups.
    Groups,
    /// Warehouse suppliers.
    Suppliers,
    /// Warehouse incomes and outcomes.
    Movements,
}

impl RecordSet {
    /// All record sets, in menu order.
    pub const ALL: [RecordSet; 4] = [
        RecordSet::Pigs,
        RecordSet::Groups,
        RecordSet::Suppliers,
        RecordSet::Movements,
    ];

    /// The name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            RecordSet::Pigs => "pigs",
            RecordSet::Groups => "groups",
            RecordSet::Suppliers => "suppliers",
            RecordSet::Movements => "movements",
        }
    }
}

impl fmt::Display for RecordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecordSet {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordSet::ALL
            .into_iter()
            .find(|set| set.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DatasetError::UnknownRecordSet(s.to_string()))
    }
}
