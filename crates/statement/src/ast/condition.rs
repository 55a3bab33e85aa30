//! Defines the boolean condition tree used by WHERE and HAVING.

use crate::ast::{
    expr::{Expr, Ident, RawSql},
    select::Select,
};
use std::ops::Not;

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `column <op> right`
    Compare {
        column: Ident,
        op: CompareOp,
        right: Expr,
    },

    /// `column [NOT] BETWEEN low AND high`
    Between {
        column: Ident,
        low: Expr,
        high: Expr,
        negated: bool,
    },

    /// `column [NOT] IN (...)`
    In {
        column: Ident,
        list: InList,
        negated: bool,
    },

    /// `column [NOT] LIKE pattern`
    Like {
        column: Ident,
        pattern: Expr,
        negated: bool,
    },

    /// `column IS [NOT] NULL`
    Null { column: Ident, negated: bool },

    And(Box<Condition>, Box<Condition>),
    Or(Box<Condition>, Box<Condition>),
    Not(Box<Condition>),

    /// Inserted verbatim.
    Raw(RawSql),
}

#[derive(Debug, Clone, PartialEq)]
pub enum InList {
    Values(Vec<Expr>),
    Subquery(Box<Select>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,    // =
    NotEq, // <>
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=
}

impl CompareOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::NotEq => "<>",
            CompareOp::Lt => "<",
            CompareOp::LtEq => "<=",
            CompareOp::Gt => ">",
            CompareOp::GtEq => ">=",
        }
    }
}

impl Condition {
    pub fn and(self, other: Condition) -> Condition {
        Condition::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Condition) -> Condition {
        Condition::Or(Box::new(self), Box::new(other))
    }

    /// Folds conditions left to right with AND. `None` when empty.
    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Option<Condition> {
        conditions.into_iter().reduce(Condition::and)
    }

    /// Folds conditions left to right with OR. `None` when empty.
    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Option<Condition> {
        conditions.into_iter().reduce(Condition::or)
    }
}

impl Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        Condition::Not(Box::new(self))
    }
}
