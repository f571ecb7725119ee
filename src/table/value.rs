//! Raw cell values.
//!
//! A [`CellValue`] is the unformatted value a row exposes for a column
//! accessor. Filtering and sorting both operate on raw values; formatting
//! for display happens separately in [`crate::table::format`].

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

/// A raw, unformatted value read from a row.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value (absent accessor or explicit null).
    #[default]
    Null,
    /// A boolean flag.
    Bool(bool),
    /// Any numeric value.
    Number(f64),
    /// A calendar date.
    Date(NaiveDate),
    /// Free text.
    Text(String),
}

impl CellValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Rank used to order values of different variants.
    fn rank(&self) -> u8 {
        match self {
            CellValue::Null => 0,
            CellValue::Bool(_) => 1,
            CellValue::Number(_) => 2,
            CellValue::Date(_) => 3,
            CellValue::Text(_) => 4,
        }
    }

    /// Compare two raw values.
    ///
    /// Values of the same variant use their natural order. Text compares by
    /// code point, so `"10" < "9"` and ISO date strings sort chronologically
    /// only because of their layout. Values of different variants are ordered
    /// by variant so the comparison stays total. `NaN` compares equal to
    /// every number.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => Ordering::Equal,
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Number(a), CellValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Plain text form used for filtering.
    ///
    /// Returns `None` for null values, which never match a filter.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}

impl From<&serde_json::Value> for CellValue {
    /// Map a JSON value onto a cell value.
    ///
    /// Arrays and objects are kept as their compact JSON text.
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => n.as_f64().map(CellValue::Number).unwrap_or(CellValue::Null),
            Value::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }
}
