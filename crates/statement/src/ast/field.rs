//! Defines the output expressions of a SELECT.

use crate::ast::{
    expr::{AggregateFunction, Expr, Ident},
    select::Select,
};

#[derive(Debug, Clone, PartialEq)]
pub enum QueryField {
    /// `[table.]column [AS alias]`
    Column { column: Ident, alias: Option<String> },

    /// `FUNC(*)` when `column` is `None`, otherwise `FUNC([table.]column)`.
    Aggregate {
        function: AggregateFunction,
        column: Option<Ident>,
        alias: Option<String>,
    },

    /// A function call or raw fragment, which may own bound values.
    Function { expr: Expr, alias: Option<String> },

    /// `(SELECT ...) [AS alias]`
    Subquery {
        select: Box<Select>,
        alias: Option<String>,
    },

    /// The dialect's last-inserted-identity expression.
    Identity,
}
