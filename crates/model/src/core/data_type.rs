use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a bound parameter.
///
/// This is a tag handed to the execution layer alongside the value; the
/// statement engine never inspects it beyond carrying it through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DataType {
    Boolean,
    Short,
    Int,
    LongLong,
    Float,
    Double,
    Decimal,
    Char,
    VarChar,
    String,
    Date,
    Time,
    Timestamp,
    Uuid,
    Bytea,
    Json,
    Null,
}

impl DataType {
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Boolean => "BOOLEAN",
            DataType::Short => "SMALLINT",
            DataType::Int => "INT",
            DataType::LongLong => "BIGINT",
            DataType::Float => "FLOAT",
            DataType::Double => "DOUBLE",
            DataType::Decimal => "DECIMAL",
            DataType::Char => "CHAR",
            DataType::VarChar => "VARCHAR",
            DataType::String => "TEXT",
            DataType::Date => "DATE",
            DataType::Time => "TIME",
            DataType::Timestamp => "TIMESTAMP",
            DataType::Uuid => "UUID",
            DataType::Bytea => "BINARY",
            DataType::Json => "JSON",
            DataType::Null => "NULL",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
