//! Provides a fluent builder for DELETE statements.

use crate::{
    ast::{condition::Condition, delete::Delete},
    builder::{Statement, condition::ConditionBuilder},
    dialect::Dialect,
    error::BuildError,
    param::{SqlCommand, StatementKind},
    renderer::render_command,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DeleteStatement {
    ast: Delete,
    dialect: Arc<dyn Dialect>,
}

impl DeleteStatement {
    pub fn new(dialect: Arc<dyn Dialect>, table: &str) -> Self {
        Self {
            ast: Delete {
                table: table.to_string(),
                where_clause: None,
            },
            dialect,
        }
    }

    pub fn where_clause(mut self, condition: Condition) -> Self {
        self.ast.where_clause = Some(condition);
        self
    }

    pub fn where_with<F>(self, f: F) -> Self
    where
        F: FnOnce(ConditionBuilder) -> Condition,
    {
        self.where_clause(f(ConditionBuilder))
    }

    pub fn build(self) -> Delete {
        self.ast
    }
}

impl Statement for DeleteStatement {
    fn kind(&self) -> StatementKind {
        StatementKind::Delete
    }

    fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    fn table_name(&self) -> &str {
        &self.ast.table
    }

    fn to_sql(&self) -> Result<SqlCommand, BuildError> {
        render_command(StatementKind::Delete, &self.ast, self.dialect.as_ref())
    }
}
