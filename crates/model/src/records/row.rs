use crate::core::value::{FieldValue, Value};
use serde::{Deserialize, Serialize};

/// One result row handed back by the execution layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RowData {
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(field_values: Vec<FieldValue>) -> Self {
        RowData { field_values }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    pub fn get_value(&self, field: &str) -> Value {
        self.get(field)
            .and_then(|f| f.value.clone())
            .unwrap_or(Value::Null)
    }

    /// The first column of the row, which is what scalar queries read.
    pub fn first_value(&self) -> Value {
        self.field_values
            .first()
            .and_then(|f| f.value.clone())
            .unwrap_or(Value::Null)
    }
}
