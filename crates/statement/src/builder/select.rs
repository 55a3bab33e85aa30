//! Provides a fluent builder for constructing `Select` ASTs.

use crate::{
    ast::{
        common::{JoinKind, OrderByExpr, OrderDir, Source},
        condition::Condition,
        expr::{AggregateFunction, Expr, Ident},
        field::QueryField,
        join::JoinClause,
        select::{Page, Select},
    },
    builder::{Statement, condition::ConditionBuilder, parse_ident},
    dialect::Dialect,
    error::BuildError,
    param::{SqlCommand, StatementKind},
    renderer::render_command,
};
use std::sync::Arc;

/// Prefix of the aliases given to subqueries used as join targets.
pub const JOIN_ALIAS_PREFIX: &str = "JT_";

/// The right-hand side of a join.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinTarget {
    Table(String),
    /// Rendered parenthesized under a generated alias.
    Select(Box<Select>),
}

impl From<&str> for JoinTarget {
    fn from(table: &str) -> Self {
        JoinTarget::Table(table.to_string())
    }
}

impl From<String> for JoinTarget {
    fn from(table: String) -> Self {
        JoinTarget::Table(table)
    }
}

impl From<SelectStatement> for JoinTarget {
    fn from(select: SelectStatement) -> Self {
        JoinTarget::Select(Box::new(select.build()))
    }
}

#[derive(Debug, Clone)]
pub struct SelectStatement {
    ast: Select,
    dialect: Arc<dyn Dialect>,
    join_index: usize,
}

impl SelectStatement {
    pub fn new(dialect: Arc<dyn Dialect>, table: &str) -> Self {
        Self::with_source(dialect, Source::Table(table.to_string()))
    }

    /// `SELECT ... FROM (<select>) AS <alias>`
    pub fn from_select(dialect: Arc<dyn Dialect>, select: SelectStatement, alias: &str) -> Self {
        Self::with_source(
            dialect,
            Source::Subquery {
                select: Box::new(select.build()),
                alias: alias.to_string(),
            },
        )
    }

    fn with_source(dialect: Arc<dyn Dialect>, source: Source) -> Self {
        Self {
            ast: Select::new(source),
            dialect,
            join_index: 0,
        }
    }

    // --- Output fields ---

    /// Adds a column; `table.column` is accepted.
    pub fn query(mut self, column: &str) -> Self {
        self.ast.fields.push(QueryField::Column {
            column: parse_ident(column),
            alias: None,
        });
        self
    }

    pub fn query_columns(self, columns: &[&str]) -> Self {
        columns.iter().fold(self, |select, column| select.query(column))
    }

    pub fn query_as(mut self, column: &str, alias: &str) -> Self {
        self.ast.fields.push(QueryField::Column {
            column: parse_ident(column),
            alias: Some(alias.to_string()),
        });
        self
    }

    pub fn query_table_column(mut self, table: &str, column: &str, alias: Option<&str>) -> Self {
        self.ast.fields.push(QueryField::Column {
            column: Ident::qualified(table, column),
            alias: alias.map(String::from),
        });
        self
    }

    /// `FUNC(column)`, or `FUNC(*)` when `column` is `None`.
    pub fn query_aggregate(
        mut self,
        function: AggregateFunction,
        column: Option<&str>,
        alias: Option<&str>,
    ) -> Self {
        self.ast.fields.push(QueryField::Aggregate {
            function,
            column: column.map(parse_ident),
            alias: alias.map(String::from),
        });
        self
    }

    pub fn query_table_aggregate(
        mut self,
        function: AggregateFunction,
        table: &str,
        column: &str,
        alias: Option<&str>,
    ) -> Self {
        self.ast.fields.push(QueryField::Aggregate {
            function,
            column: Some(Ident::qualified(table, column)),
            alias: alias.map(String::from),
        });
        self
    }

    /// A function call or raw fragment as an output field.
    pub fn query_function(mut self, function: impl Into<Expr>, alias: Option<&str>) -> Self {
        self.ast.fields.push(QueryField::Function {
            expr: function.into(),
            alias: alias.map(String::from),
        });
        self
    }

    /// A scalar subquery as an output field.
    pub fn query_select(mut self, select: SelectStatement, alias: Option<&str>) -> Self {
        self.ast.fields.push(QueryField::Subquery {
            select: Box::new(select.build()),
            alias: alias.map(String::from),
        });
        self
    }

    /// The identity generated by the last insert, in the dialect's spelling.
    pub fn query_identity(mut self) -> Self {
        self.ast.fields.push(QueryField::Identity);
        self
    }

    pub fn distinct(mut self) -> Self {
        self.ast.distinct = true;
        self
    }

    // --- Aggregate shortcuts ---
    // These replace any configured output fields.

    pub fn count(self) -> Self {
        self.single_aggregate(AggregateFunction::Count, None)
    }

    pub fn count_of(self, column: &str) -> Self {
        self.single_aggregate(AggregateFunction::Count, Some(column))
    }

    pub fn max(self, column: &str) -> Self {
        self.single_aggregate(AggregateFunction::Max, Some(column))
    }

    pub fn min(self, column: &str) -> Self {
        self.single_aggregate(AggregateFunction::Min, Some(column))
    }

    pub fn avg(self, column: &str) -> Self {
        self.single_aggregate(AggregateFunction::Avg, Some(column))
    }

    pub fn sum(self, column: &str) -> Self {
        self.single_aggregate(AggregateFunction::Sum, Some(column))
    }

    fn single_aggregate(mut self, function: AggregateFunction, column: Option<&str>) -> Self {
        self.ast.fields.clear();
        self.query_aggregate(function, column, None)
    }

    // --- Filtering and grouping ---

    /// Sets the WHERE condition, replacing any previous one.
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

    pub fn group_by(mut self, columns: &[&str]) -> Self {
        self.ast
            .group_by
            .extend(columns.iter().map(|c| c.to_string()));
        self
    }

    pub fn having(mut self, condition: Condition) -> Self {
        self.ast.having = Some(condition);
        self
    }

    pub fn having_with<F>(self, f: F) -> Self
    where
        F: FnOnce(ConditionBuilder) -> Condition,
    {
        self.having(f(ConditionBuilder))
    }

    // --- Ordering ---

    pub fn order_by(mut self, column: &str, direction: OrderDir) -> Self {
        self.ast.order_by.push(OrderByExpr {
            column: column.to_string(),
            direction,
        });
        self
    }

    pub fn order_by_asc(self, columns: &[&str]) -> Self {
        columns
            .iter()
            .fold(self, |select, column| select.order_by(column, OrderDir::Asc))
    }

    pub fn order_by_desc(self, columns: &[&str]) -> Self {
        columns
            .iter()
            .fold(self, |select, column| select.order_by(column, OrderDir::Desc))
    }

    // --- Joins ---

    /// Joins `target` on `<source>.<left_column> = <target>.<right_column>`.
    ///
    /// A subquery target is aliased `JT_0`, `JT_1`, ... in the order joins
    /// are added to this statement.
    pub fn join(
        mut self,
        kind: JoinKind,
        left_column: &str,
        target: impl Into<JoinTarget>,
        right_column: &str,
    ) -> Self {
        let right = match target.into() {
            JoinTarget::Table(table) => Source::Table(table),
            JoinTarget::Select(select) => {
                let alias = format!("{JOIN_ALIAS_PREFIX}{}", self.join_index);
                self.join_index += 1;
                Source::Subquery { select, alias }
            }
        };

        self.ast.joins.push(JoinClause {
            kind,
            left_table: self.ast.source.name().to_string(),
            left_column: left_column.to_string(),
            right,
            right_column: right_column.to_string(),
        });
        self
    }

    pub fn inner_join(
        self,
        left_column: &str,
        target: impl Into<JoinTarget>,
        right_column: &str,
    ) -> Self {
        self.join(JoinKind::Inner, left_column, target, right_column)
    }

    pub fn left_join(
        self,
        left_column: &str,
        target: impl Into<JoinTarget>,
        right_column: &str,
    ) -> Self {
        self.join(JoinKind::Left, left_column, target, right_column)
    }

    pub fn right_join(
        self,
        left_column: &str,
        target: impl Into<JoinTarget>,
        right_column: &str,
    ) -> Self {
        self.join(JoinKind::Right, left_column, target, right_column)
    }

    pub fn full_join(
        self,
        left_column: &str,
        target: impl Into<JoinTarget>,
        right_column: &str,
    ) -> Self {
        self.join(JoinKind::Full, left_column, target, right_column)
    }

    // --- Paging ---

    /// The first `size` rows.
    pub fn top(self, size: i64) -> Result<Self, BuildError> {
        self.limit(size, 0)
    }

    /// `size` rows starting at the zero-based `record_start`.
    pub fn limit(mut self, size: i64, record_start: i64) -> Result<Self, BuildError> {
        let size = non_negative("page_size", size)?;
        let start = non_negative("record_start", record_start)?;
        self.ast.page = window("record_start", size, Some(start))?;
        Ok(self)
    }

    /// Page `page_index` (1-based) of `size` rows. Indexes below one read the
    /// first page.
    pub fn paged(mut self, size: i64, page_index: i64) -> Result<Self, BuildError> {
        let size = non_negative("page_size", size)?;
        let start = usize::try_from(page_index.max(1) - 1)
            .ok()
            .and_then(|index| index.checked_mul(size));
        self.ast.page = window("page_index", size, start)?;
        Ok(self)
    }

    pub fn first(mut self) -> Self {
        self.ast.page = Page { size: 1, start: 0 };
        self
    }

    pub fn page_size(&self) -> usize {
        self.ast.page.size
    }

    pub fn record_start(&self) -> usize {
        self.ast.page.start
    }

    /// Finalizes and returns the constructed `Select` AST.
    pub fn build(self) -> Select {
        self.ast
    }
}

fn non_negative(argument: &'static str, value: i64) -> Result<usize, BuildError> {
    usize::try_from(value)
        .map_err(|_| BuildError::contract(argument, format!("must be >= 0, got {value}")))
}

/// A window whose last row index fits in `usize`; `None` marks an
/// offset that already overflowed.
fn window(argument: &'static str, size: usize, start: Option<usize>) -> Result<Page, BuildError> {
    start
        .map(|start| Page { size, start })
        .filter(|page| page.end().is_ok())
        .ok_or_else(|| {
            BuildError::contract(argument, format!("puts the page end past {}", usize::MAX))
        })
}

impl Statement for SelectStatement {
    fn kind(&self) -> StatementKind {
        StatementKind::Select
    }

    fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    fn table_name(&self) -> &str {
        self.ast.source.name()
    }

    fn to_sql(&self) -> Result<SqlCommand, BuildError> {
        render_command(StatementKind::Select, &self.ast, self.dialect.as_ref())
    }
}
