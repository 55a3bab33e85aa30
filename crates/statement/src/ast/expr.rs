//! Defines the AST for SQL value expressions.

use crate::ast::select::Select;
use model::core::{data_type::DataType, value::Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column reference, e.g. `UserID` or `tbl_Users.UserID`.
    Column(Ident),

    /// A value bound as a parameter; rendered as a dialect placeholder.
    Bind(Bind),

    /// A function call, e.g. `GETDATE()` or `UPPER(UserName)`.
    Function(FunctionCall),

    /// Caller-supplied SQL text with its own bound values.
    Raw(RawSql),

    /// A parenthesized SELECT used as a value.
    Subquery(Box<Select>),

    /// Arithmetic on two expressions, e.g. `Count+@PN_IDX_0`.
    Arithmetic {
        left: Box<Expr>,
        op: ArithmeticOp,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn bind(value: impl Into<Value>) -> Self {
        Expr::Bind(Bind::new(value))
    }

    pub fn column(name: &str) -> Self {
        Expr::Column(Ident::new(name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g., the 'users' in 'users.id'
    pub name: String,              // e.g., the 'id' in 'users.id'
}

impl Ident {
    pub fn new(name: &str) -> Self {
        Ident {
            qualifier: None,
            name: name.to_string(),
        }
    }

    pub fn qualified(qualifier: &str, name: &str) -> Self {
        Ident {
            qualifier: Some(qualifier.to_string()),
            name: name.to_string(),
        }
    }
}

/// A value waiting to become a [`crate::param::Parameter`].
///
/// Binds carry no name. The renderer assigns name and ordinal when it emits
/// the placeholder, so a bind keeps a unique name no matter how deeply the
/// statement holding it is nested into another one.
#[derive(Debug, Clone, PartialEq)]
pub struct Bind {
    pub column: Option<String>,
    pub data_type: Option<DataType>,
    pub value: Value,
}

impl Bind {
    pub fn new(value: impl Into<Value>) -> Self {
        Bind {
            column: None,
            data_type: None,
            value: value.into(),
        }
    }

    pub fn for_column(column: &str, data_type: Option<DataType>, value: impl Into<Value>) -> Self {
        Bind {
            column: Some(column.to_string()),
            data_type,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: FunctionName,
    pub args: Vec<Expr>,
}

impl FunctionCall {
    pub fn now() -> Self {
        Self::logical(LogicalFunction::Now, Vec::new())
    }

    pub fn length(column: &str) -> Self {
        Self::logical(LogicalFunction::Length, vec![Expr::column(column)])
    }

    pub fn upper(column: &str) -> Self {
        Self::logical(LogicalFunction::Upper, vec![Expr::column(column)])
    }

    pub fn lower(column: &str) -> Self {
        Self::logical(LogicalFunction::Lower, vec![Expr::column(column)])
    }

    pub fn logical(function: LogicalFunction, args: Vec<Expr>) -> Self {
        FunctionCall {
            name: FunctionName::Logical(function),
            args,
        }
    }

    /// A function whose name is passed to the backend unchanged.
    pub fn named(name: &str, args: Vec<Expr>) -> Self {
        FunctionCall {
            name: FunctionName::Named(name.to_string()),
            args,
        }
    }
}

impl From<FunctionCall> for Expr {
    fn from(function: FunctionCall) -> Self {
        Expr::Function(function)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionName {
    /// Translated per dialect, e.g. `Now` becomes `GETDATE()` or `SYSDATE`.
    Logical(LogicalFunction),
    Named(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalFunction {
    Now,
    Length,
    Upper,
    Lower,
}

impl LogicalFunction {
    /// Niladic functions render as the translated text alone, with no
    /// argument list.
    pub fn is_niladic(&self) -> bool {
        matches!(self, LogicalFunction::Now)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    Count,
    Sum,
    Avg,
    Max,
    Min,
}

impl AggregateFunction {
    pub fn name(&self) -> &'static str {
        match self {
            AggregateFunction::Count => "COUNT",
            AggregateFunction::Sum => "SUM",
            AggregateFunction::Avg => "AVG",
            AggregateFunction::Max => "MAX",
            AggregateFunction::Min => "MIN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Sub,
}

/// Raw SQL text interleaved with bound values.
///
/// The text is emitted verbatim. Nothing checks it for injection safety.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSql {
    pub parts: Vec<RawPart>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RawPart {
    Text(String),
    Bind(Bind),
}

impl RawSql {
    pub fn new(text: &str) -> Self {
        RawSql {
            parts: vec![RawPart::Text(text.to_string())],
        }
    }

    pub fn push(mut self, text: &str) -> Self {
        self.parts.push(RawPart::Text(text.to_string()));
        self
    }

    pub fn push_bind(mut self, value: impl Into<Value>) -> Self {
        self.parts.push(RawPart::Bind(Bind::new(value)));
        self
    }
}

impl From<RawSql> for Expr {
    fn from(raw: RawSql) -> Self {
        Expr::Raw(raw)
    }
}
