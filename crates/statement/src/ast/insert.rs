//! Defines the AST for an INSERT statement.

use crate::ast::common::Assignment;

/// Represents a single-row INSERT.
///
/// Column and value lists are both rendered from `columns`, so they can
/// never disagree on order or length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insert {
    pub table: String,
    pub columns: Vec<Assignment>,
}
