use crate::{config::DatabaseConfig, error::DatabaseError, executor::Executor};
use model::{core::value::Value, records::row::RowData};
use statement::{
    DeleteStatement, Dialect, DialectKind, InsertStatement, SelectStatement, SqlCommand,
    Statement, StatementKind, UpdateStatement,
};
use std::sync::Arc;
use tracing::{debug, info};

/// A statement factory bound to one dialect.
#[derive(Debug, Clone)]
pub struct Database {
    kind: DialectKind,
    dialect: Arc<dyn Dialect>,
    connection_string: Option<String>,
}

impl Database {
    pub fn new(kind: DialectKind) -> Self {
        Database {
            kind,
            dialect: kind.dialect(),
            connection_string: None,
        }
    }

    pub fn from_provider(provider: &str) -> Result<Self, DatabaseError> {
        Self::from_config(&DatabaseConfig::new(provider))
    }

    pub fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let kind = config.dialect_kind()?;
        info!(provider = %config.provider, dialect = %kind, "Resolved database dialect");

        Ok(Database {
            connection_string: config.connection_string.clone(),
            ..Self::new(kind)
        })
    }

    pub fn kind(&self) -> DialectKind {
        self.kind
    }

    pub fn dialect(&self) -> Arc<dyn Dialect> {
        Arc::clone(&self.dialect)
    }

    pub fn connection_string(&self) -> Option<&str> {
        self.connection_string.as_deref()
    }

    // --- Statement factory ---

    pub fn insert(&self, table: &str) -> InsertStatement {
        InsertStatement::new(self.dialect(), table)
    }

    pub fn select(&self, table: &str) -> SelectStatement {
        SelectStatement::new(self.dialect(), table)
    }

    pub fn select_from(&self, select: SelectStatement, alias: &str) -> SelectStatement {
        SelectStatement::from_select(self.dialect(), select, alias)
    }

    pub fn update(&self, table: &str) -> UpdateStatement {
        UpdateStatement::new(self.dialect(), table)
    }

    pub fn delete(&self, table: &str) -> DeleteStatement {
        DeleteStatement::new(self.dialect(), table)
    }

    // --- Execution shortcuts ---

    pub async fn rows<E, S>(
        &self,
        executor: &E,
        statement: &S,
    ) -> Result<Vec<RowData>, DatabaseError>
    where
        E: Executor + ?Sized,
        S: Statement + Sync,
    {
        let command = statement.to_sql()?;
        let rows = executor.query(&command).await?;
        debug!(table = statement.table_name(), rows = rows.len(), "Query returned");
        Ok(rows)
    }

    /// Reads at most one row.
    pub async fn first<E>(
        &self,
        executor: &E,
        select: SelectStatement,
    ) -> Result<Option<RowData>, DatabaseError>
    where
        E: Executor + ?Sized,
    {
        let rows = self.rows(executor, &select.first()).await?;
        Ok(rows.into_iter().next())
    }

    /// The first column of the first row; `Null` when there are no rows.
    pub async fn scalar<E>(
        &self,
        executor: &E,
        select: &SelectStatement,
    ) -> Result<Value, DatabaseError>
    where
        E: Executor + ?Sized,
    {
        let rows = self.rows(executor, select).await?;
        Ok(rows.first().map(RowData::first_value).unwrap_or(Value::Null))
    }

    /// `COUNT(*)` over the statement's source and filters. Output fields
    /// configured on `select` are discarded.
    pub async fn count<E>(
        &self,
        executor: &E,
        select: SelectStatement,
    ) -> Result<i64, DatabaseError>
    where
        E: Executor + ?Sized,
    {
        let value = self.scalar(executor, &select.count()).await?;
        value.as_i64().ok_or_else(|| {
            DatabaseError::UnexpectedResult(format!("COUNT returned a non-integer value: {value}"))
        })
    }

    /// `None` when the source is empty.
    pub async fn max<E>(
        &self,
        executor: &E,
        select: SelectStatement,
        column: &str,
    ) -> Result<Option<Value>, DatabaseError>
    where
        E: Executor + ?Sized,
    {
        let value = self.scalar(executor, &select.max(column)).await?;
        Ok((!value.is_null()).then_some(value))
    }

    pub async fn min<E>(
        &self,
        executor: &E,
        select: SelectStatement,
        column: &str,
    ) -> Result<Option<Value>, DatabaseError>
    where
        E: Executor + ?Sized,
    {
        let value = self.scalar(executor, &select.min(column)).await?;
        Ok((!value.is_null()).then_some(value))
    }

    pub async fn avg<E>(
        &self,
        executor: &E,
        select: SelectStatement,
        column: &str,
    ) -> Result<Option<f64>, DatabaseError>
    where
        E: Executor + ?Sized,
    {
        let value = self.scalar(executor, &select.avg(column)).await?;
        if value.is_null() {
            return Ok(None);
        }
        value.as_f64().map(Some).ok_or_else(|| {
            DatabaseError::UnexpectedResult(format!("AVG returned a non-numeric value: {value}"))
        })
    }

    /// Runs an INSERT, UPDATE or DELETE and returns the affected row count.
    pub async fn execute<E, S>(&self, executor: &E, statement: &S) -> Result<u64, DatabaseError>
    where
        E: Executor + ?Sized,
        S: Statement + Sync,
    {
        let command = statement.to_sql()?;
        let affected = executor.execute(&command).await?;
        debug!(
            statement = %command.kind,
            table = statement.table_name(),
            affected,
            "Statement executed"
        );
        Ok(affected)
    }

    /// Runs `insert` and reads back the generated identity.
    ///
    /// Fails before touching the executor when the dialect cannot report
    /// identities. The caller must keep both commands on one connection.
    pub async fn insert_and_get_identity<E>(
        &self,
        executor: &E,
        insert: &InsertStatement,
    ) -> Result<Value, DatabaseError>
    where
        E: Executor + ?Sized,
    {
        let identity = SqlCommand {
            kind: StatementKind::Select,
            text: self.dialect.identity_query()?,
            parameters: Vec::new(),
        };

        self.execute(executor, insert).await?;
        let rows = executor.query(&identity).await?;
        rows.first().map(RowData::first_value).ok_or_else(|| {
            DatabaseError::UnexpectedResult("identity query returned no rows".into())
        })
    }
}
