//! Provides a fluent builder for UPDATE statements.

use crate::{
    ast::{
        common::Assignment,
        condition::Condition,
        expr::{ArithmeticOp, Bind, Expr, Ident},
        update::Update,
    },
    builder::{Statement, condition::ConditionBuilder, select::SelectStatement},
    dialect::Dialect,
    error::BuildError,
    param::{SqlCommand, StatementKind},
    renderer::render_command,
};
use model::{
    core::{data_type::DataType, value::Value},
    entity::Entity,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct UpdateStatement {
    ast: Update,
    dialect: Arc<dyn Dialect>,
}

impl UpdateStatement {
    pub fn new(dialect: Arc<dyn Dialect>, table: &str) -> Self {
        Self {
            ast: Update {
                table: table.to_string(),
                ..Default::default()
            },
            dialect,
        }
    }

    pub fn set(self, column: &str, value: impl Into<Value>) -> Self {
        let bind = Bind::for_column(column, None, value);
        self.set_expr(column, Expr::Bind(bind))
    }

    pub fn set_typed(self, column: &str, data_type: DataType, value: impl Into<Value>) -> Self {
        let bind = Bind::for_column(column, Some(data_type), value);
        self.set_expr(column, Expr::Bind(bind))
    }

    pub fn set_function(self, column: &str, function: impl Into<Expr>) -> Self {
        self.set_expr(column, function.into())
    }

    pub fn set_select(self, column: &str, select: SelectStatement) -> Self {
        self.set_expr(column, Expr::Subquery(Box::new(select.build())))
    }

    pub fn set_expr(mut self, column: &str, value: Expr) -> Self {
        self.ast.assignments.push(Assignment {
            column: column.to_string(),
            value,
        });
        self
    }

    pub fn set_all<I, K, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        values
            .into_iter()
            .fold(self, |update, (column, value)| update.set(column.as_ref(), value))
    }

    pub fn set_entity(self, entity: &impl Entity) -> Self {
        entity.column_values().into_iter().fold(self, |update, cv| {
            let bind = Bind::for_column(&cv.column, cv.data_type, cv.value);
            update.set_expr(&cv.column, Expr::Bind(bind))
        })
    }

    /// `column=column+value`
    pub fn increase(self, column: &str, value: impl Into<Value>) -> Self {
        self.offset(column, ArithmeticOp::Add, value.into())
    }

    /// `column=column-value`
    pub fn decrease(self, column: &str, value: impl Into<Value>) -> Self {
        self.offset(column, ArithmeticOp::Sub, value.into())
    }

    fn offset(self, column: &str, op: ArithmeticOp, value: Value) -> Self {
        let expr = Expr::Arithmetic {
            left: Box::new(Expr::Column(Ident::new(column))),
            op,
            right: Box::new(Expr::Bind(Bind::for_column(column, None, value))),
        };
        self.set_expr(column, expr)
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

    pub fn build(self) -> Update {
        self.ast
    }
}

impl Statement for UpdateStatement {
    fn kind(&self) -> StatementKind {
        StatementKind::Update
    }

    fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    fn table_name(&self) -> &str {
        &self.ast.table
    }

    fn to_sql(&self) -> Result<SqlCommand, BuildError> {
        render_command(StatementKind::Update, &self.ast, self.dialect.as_ref())
    }
}
