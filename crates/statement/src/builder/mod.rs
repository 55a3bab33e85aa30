//! Fluent, dialect-bound builders for the four statement kinds.
//!
//! Every builder method consumes and returns the builder, so a statement
//! is composed in one expression. Nothing is rendered until
//! [`Statement::to_sql`] is called.

use crate::{
    ast::expr::Ident,
    dialect::Dialect,
    error::BuildError,
    param::{Parameter, SqlCommand, StatementKind},
};

pub mod condition;
pub mod delete;
pub mod insert;
pub mod select;
pub mod update;

pub trait Statement {
    fn kind(&self) -> StatementKind;

    fn dialect(&self) -> &dyn Dialect;

    fn table_name(&self) -> &str;

    /// Renders the statement text and its parameters in one pass.
    fn to_sql(&self) -> Result<SqlCommand, BuildError>;

    fn render_text(&self) -> Result<String, BuildError> {
        Ok(self.to_sql()?.text)
    }

    /// The parameters in the order their placeholders appear in the text.
    fn collect_parameters(&self) -> Result<Vec<Parameter>, BuildError> {
        Ok(self.to_sql()?.parameters)
    }
}

/// Splits `table.column` into a qualified identifier.
pub(crate) fn parse_ident(column: &str) -> Ident {
    match column.rsplit_once('.') {
        Some((qualifier, name)) if !qualifier.is_empty() => Ident::qualified(qualifier, name),
        _ => Ident::new(column),
    }
}
