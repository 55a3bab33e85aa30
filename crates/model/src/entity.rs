//! Boundary with the entity-mapping layer.
//!
//! Statements never reflect over user types. A mapped type describes itself
//! as an ordered list of column/value pairs and the INSERT and UPDATE
//! builders consume that list as if each pair had been added by hand.

use crate::core::{data_type::DataType, value::Value};

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnValue {
    pub column: String,
    pub data_type: Option<DataType>,
    pub value: Value,
}

impl ColumnValue {
    pub fn new(column: &str, value: impl Into<Value>) -> Self {
        ColumnValue {
            column: column.to_string(),
            data_type: None,
            value: value.into(),
        }
    }

    pub fn typed(column: &str, data_type: DataType, value: impl Into<Value>) -> Self {
        ColumnValue {
            column: column.to_string(),
            data_type: Some(data_type),
            value: value.into(),
        }
    }
}

pub trait Entity {
    /// Table the entity is stored in.
    fn table_name(&self) -> &str;

    /// Column/value pairs in the order the columns should be written.
    fn column_values(&self) -> Vec<ColumnValue>;
}
