//! JSON-backed table rows.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::table::{CellValue, TableRow};

/// One row of a dataset file.
///
/// The original JSON object is kept as-is; the `id` field is normalized to a
/// string for selection bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: String,
    fields: Map<String, Value>,
}

impl Record {
    /// Build a record from a JSON object.
    ///
    /// Returns `None` if the object has no string or numeric `id`.
    pub fn from_fields(fields: Map<String, Value>) -> Option<Self> {
        let id = match fields.get("id")? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        Some(Self { id, fields })
    }

    /// Look up a field by name, falling back to a dotted path into nested objects.
    fn lookup(&self, accessor: &str) -> Option<&Value> {
        if let Some(value) = self.fields.get(accessor) {
            return Some(value);
        }

        let mut parts = accessor.split('.');
        let mut current = self.fields.get(parts.next()?)?;
        for part in parts {
            current = current.as_object()?.get(part)?;
        }
        Some(current)
    }
}

impl TableRow for Record {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, accessor: &str) -> CellValue {
        self.lookup(accessor).map(CellValue::from).unwrap_or_default()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
