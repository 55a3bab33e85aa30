//! Defines the Abstract Syntax Tree (AST) for a SELECT query.

use crate::{
    ast::{
        common::{OrderByExpr, Source},
        condition::Condition,
        field::QueryField,
        join::JoinClause,
    },
    error::BuildError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// The table or subquery rows are read from.
    pub source: Source,

    pub distinct: bool,

    /// Output fields in render order. Empty renders as `*`.
    pub fields: Vec<QueryField>,

    /// JOIN clauses in insertion order.
    pub joins: Vec<JoinClause>,

    pub where_clause: Option<Condition>,

    pub group_by: Vec<String>,

    pub having: Option<Condition>,

    pub order_by: Vec<OrderByExpr>,

    /// The logical paging window; the dialect decides the syntax.
    pub page: Page,
}

impl Select {
    pub fn new(source: Source) -> Self {
        Select {
            source,
            distinct: false,
            fields: Vec::new(),
            joins: Vec::new(),
            where_clause: None,
            group_by: Vec::new(),
            having: None,
            order_by: Vec::new(),
            page: Page::default(),
        }
    }
}

/// A `(size, start)` window. A size of zero means unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub size: usize,
    pub start: usize,
}

impl Page {
    /// One past the last row of the window.
    pub fn end(&self) -> Result<usize, BuildError> {
        self.start.checked_add(self.size).ok_or_else(|| {
            BuildError::contract(
                "page",
                format!("record start {} plus size {} overflows", self.start, self.size),
            )
        })
    }
}
