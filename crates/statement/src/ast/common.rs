//! Defines common, reusable AST nodes for building SQL statements.

use crate::ast::{expr::Expr, select::Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
}

impl JoinKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL OUTER JOIN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDir {
    Asc,
    Desc,
}

impl OrderDir {
    pub fn keyword(&self) -> &'static str {
        match self {
            OrderDir::Asc => "ASC",
            OrderDir::Desc => "DESC",
        }
    }

    pub fn reversed(&self) -> OrderDir {
        match self {
            OrderDir::Asc => OrderDir::Desc,
            OrderDir::Desc => OrderDir::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub column: String,
    pub direction: OrderDir,
}

/// A `column = value` pair, shared by INSERT column lists and UPDATE SET lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Expr,
}

/// A row source: either a named table or a parenthesized, aliased SELECT.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Table(String),
    Subquery { select: Box<Select>, alias: String },
}

impl Source {
    /// The name other clauses use to qualify columns of this source.
    pub fn name(&self) -> &str {
        match self {
            Source::Table(name) => name,
            Source::Subquery { alias, .. } => alias,
        }
    }
}
