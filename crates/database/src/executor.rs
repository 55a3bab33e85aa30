use crate::error::DatabaseError;
use async_trait::async_trait;
use model::records::row::RowData;
use statement::SqlCommand;

/// Runs rendered commands against a live connection.
///
/// Implementations bind `command.parameters` in order; positional
/// dialects rely on it.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Runs a row-returning command.
    async fn query(&self, command: &SqlCommand) -> Result<Vec<RowData>, DatabaseError>;

    /// Runs a command and returns the number of affected rows. Zero is not
    /// an error.
    async fn execute(&self, command: &SqlCommand) -> Result<u64, DatabaseError>;
}
