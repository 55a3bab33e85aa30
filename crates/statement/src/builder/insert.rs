//! Provides a fluent builder for single-row INSERT statements.

use crate::{
    ast::{
        common::Assignment,
        expr::{Bind, Expr},
        insert::Insert,
    },
    builder::{Statement, select::SelectStatement},
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
pub struct InsertStatement {
    ast: Insert,
    dialect: Arc<dyn Dialect>,
}

impl InsertStatement {
    pub fn new(dialect: Arc<dyn Dialect>, table: &str) -> Self {
        Self {
            ast: Insert {
                table: table.to_string(),
                columns: Vec::new(),
            },
            dialect,
        }
    }

    /// Binds `value` to `column`.
    pub fn add(self, column: &str, value: impl Into<Value>) -> Self {
        let bind = Bind::for_column(column, None, value);
        self.add_expr(column, Expr::Bind(bind))
    }

    /// Binds `value` to `column` with an explicit parameter type.
    pub fn add_typed(self, column: &str, data_type: DataType, value: impl Into<Value>) -> Self {
        let bind = Bind::for_column(column, Some(data_type), value);
        self.add_expr(column, Expr::Bind(bind))
    }

    /// Writes a function call or raw fragment; its own binds come along.
    pub fn add_function(self, column: &str, function: impl Into<Expr>) -> Self {
        self.add_expr(column, function.into())
    }

    /// Writes the result of a scalar subquery.
    pub fn add_select(self, column: &str, select: SelectStatement) -> Self {
        self.add_expr(column, Expr::Subquery(Box::new(select.build())))
    }

    pub fn add_expr(mut self, column: &str, value: Expr) -> Self {
        self.ast.columns.push(Assignment {
            column: column.to_string(),
            value,
        });
        self
    }

    /// Adds every pair in iteration order.
    pub fn add_all<I, K, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        values
            .into_iter()
            .fold(self, |insert, (column, value)| insert.add(column.as_ref(), value))
    }

    /// Adds the entity's mapped columns in the order it reports them.
    pub fn add_entity(self, entity: &impl Entity) -> Self {
        entity.column_values().into_iter().fold(self, |insert, cv| {
            let bind = Bind::for_column(&cv.column, cv.data_type, cv.value);
            insert.add_expr(&cv.column, Expr::Bind(bind))
        })
    }

    /// Finalizes and returns the constructed `Insert` AST.
    pub fn build(self) -> Insert {
        self.ast
    }
}

impl Statement for InsertStatement {
    fn kind(&self) -> StatementKind {
        StatementKind::Insert
    }

    fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    fn table_name(&self) -> &str {
        &self.ast.table
    }

    fn to_sql(&self) -> Result<SqlCommand, BuildError> {
        render_command(StatementKind::Insert, &self.ast, self.dialect.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::expr::FunctionCall, dialect::DialectKind, raw};
    use model::entity::ColumnValue;
    use std::collections::BTreeMap;

    struct TestEntity {
        values: [i64; 8],
    }

    impl Entity for TestEntity {
        fn table_name(&self) -> &str {
            "TestTable"
        }

        fn column_values(&self) -> Vec<ColumnValue> {
            self.values
                .iter()
                .enumerate()
                .map(|(i, v)| ColumnValue::new(&format!("C{}", i + 1), *v))
                .collect()
        }
    }

    fn sqlserver(table: &str) -> InsertStatement {
        InsertStatement::new(DialectKind::SqlServer.dialect(), table)
    }

    #[test]
    fn test_eight_columns_in_call_order() {
        let insert = (1..=8).fold(sqlserver("TestTable"), |insert, i| {
            insert.add(&format!("C{i}"), i * 10)
        });
        let command = insert.to_sql().unwrap();

        assert_eq!(
            command.text,
            "INSERT INTO TestTable ( C1,C2,C3,C4,C5,C6,C7,C8 ) VALUES \
             ( @PN_IDX_0,@PN_IDX_1,@PN_IDX_2,@PN_IDX_3,@PN_IDX_4,@PN_IDX_5,@PN_IDX_6,@PN_IDX_7 )"
        );
        assert_eq!(command.parameters.len(), 8);
        for (i, param) in command.parameters.iter().enumerate() {
            assert_eq!(param.ordinal, i);
            assert_eq!(param.column.as_deref(), Some(format!("C{}", i + 1).as_str()));
            assert_eq!(param.value, Value::Int((i as i64 + 1) * 10));
        }
    }

    #[test]
    fn test_entity_insert_matches_manual_insert() {
        let entity = TestEntity {
            values: [10, 20, 30, 40, 50, 60, 70, 80],
        };
        let from_entity = sqlserver(entity.table_name()).add_entity(&entity);
        let manual = (1..=8).fold(sqlserver("TestTable"), |insert, i| {
            insert.add(&format!("C{i}"), i * 10)
        });

        assert_eq!(from_entity.to_sql().unwrap(), manual.to_sql().unwrap());
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let insert = sqlserver("tbl_Users").add("UserName", "mays").add("Age", 30);
        assert_eq!(insert.to_sql().unwrap(), insert.to_sql().unwrap());
        assert_eq!(insert.render_text().unwrap(), insert.to_sql().unwrap().text);
    }

    #[test]
    fn test_typed_function_and_subquery_columns() {
        let max_level = SelectStatement::new(DialectKind::Postgres.dialect(), "tbl_Levels")
            .max("Level")
            .where_clause(crate::ConditionBuilder.equal("Active", true));

        let insert = InsertStatement::new(DialectKind::Postgres.dialect(), "tbl_Users")
            .add_typed("UserName", DataType::VarChar, "mays")
            .add_function("CreateTime", FunctionCall::now())
            .add_function("Expires", raw!("NOW() + ", 30, " * INTERVAL '1 day'"))
            .add_select("Level", max_level);
        let command = insert.to_sql().unwrap();

        assert_eq!(
            command.text,
            "INSERT INTO tbl_Users ( UserName,CreateTime,Expires,Level ) VALUES \
             ( $1,NOW(),NOW() + $2 * INTERVAL '1 day',(SELECT MAX(Level) FROM tbl_Levels WHERE Active = $3) )"
        );
        assert_eq!(command.parameters[0].data_type, Some(DataType::VarChar));
        assert_eq!(command.parameters[2].value, Value::Boolean(true));
    }

    #[test]
    fn test_add_all_keeps_iteration_order() {
        let values: BTreeMap<&str, i64> = [("B", 2), ("A", 1)].into_iter().collect();
        let command = sqlserver("T").add_all(values).to_sql().unwrap();

        assert_eq!(
            command.text,
            "INSERT INTO T ( A,B ) VALUES ( @PN_IDX_0,@PN_IDX_1 )"
        );
    }
}
