//! Bound parameters and the rendered command handed to the execution layer.

use crate::ast::expr::Bind;
use model::core::{data_type::DataType, value::Value};
use serde::Serialize;
use std::fmt;

/// Prefix of every generated parameter name.
pub const PARAMETER_PREFIX: &str = "PN_IDX_";

/// One bound value of a rendered statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub ordinal: usize,
    /// The column the value was bound for, when there is one.
    pub column: Option<String>,
    pub data_type: Option<DataType>,
    pub value: Value,
}

impl Parameter {
    pub fn new(ordinal: usize, bind: &Bind) -> Self {
        Parameter {
            name: format!("{PARAMETER_PREFIX}{ordinal}"),
            ordinal,
            column: bind.column.clone(),
            data_type: bind.data_type,
            value: bind.value.clone(),
        }
    }

    /// The declared type, or the one implied by the value.
    pub fn effective_type(&self) -> DataType {
        self.data_type.unwrap_or_else(|| self.value.data_type())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatementKind {
    Insert,
    Select,
    Update,
    Delete,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatementKind::Insert => "INSERT",
            StatementKind::Select => "SELECT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Final SQL text plus its parameters in placeholder order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlCommand {
    pub kind: StatementKind,
    pub text: String,
    pub parameters: Vec<Parameter>,
}

impl SqlCommand {
    pub fn values(&self) -> Vec<Value> {
        self.parameters.iter().map(|p| p.value.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_name_follows_ordinal() {
        let bind = Bind::for_column("UserID", Some(DataType::Int), 1);
        let param = Parameter::new(3, &bind);

        assert_eq!(param.name, "PN_IDX_3");
        assert_eq!(param.ordinal, 3);
        assert_eq!(param.column.as_deref(), Some("UserID"));
        assert_eq!(param.effective_type(), DataType::Int);
    }

    #[test]
    fn test_command_serializes_for_logging() {
        let command = SqlCommand {
            kind: StatementKind::Delete,
            text: "DELETE FROM T WHERE ID = @PN_IDX_0".into(),
            parameters: vec![Parameter::new(0, &Bind::for_column("ID", None, 5))],
        };

        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["kind"], "Delete");
        assert_eq!(json["parameters"][0]["name"], "PN_IDX_0");
        assert_eq!(json["parameters"][0]["value"], serde_json::json!({ "Int": 5 }));
        assert_eq!(command.values(), vec![Value::Int(5)]);
    }

    #[test]
    fn test_effective_type_falls_back_to_value() {
        let param = Parameter::new(0, &Bind::new("admin"));
        assert_eq!(param.effective_type(), DataType::String);
    }
}
