//! Defines the core rendering trait and context for converting AST to SQL.

use crate::{
    ast::expr::Bind,
    dialect::Dialect,
    error::BuildError,
    param::{Parameter, SqlCommand, StatementKind},
};
use tracing::{debug, trace};

pub mod condition;
pub mod delete;
pub mod expr;
pub mod insert;
pub mod select;
pub mod update;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer) -> Result<(), BuildError>;
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the parameters, and provides
/// access to the dialect for syntax-specific details. It is also the only
/// place parameters get their names: the ordinal is the number of
/// parameters emitted so far, so names are unique across every nested
/// subquery, join and function rendered through the same context.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Parameter>,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
        }
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, Vec<Parameter>) {
        (self.sql, self.params)
    }

    pub fn add_param(&mut self, bind: &Bind) {
        let param = Parameter::new(self.params.len(), bind);
        let placeholder = self.dialect.placeholder(&param.name, param.ordinal);
        self.sql.push_str(&placeholder);
        self.params.push(param);
    }

    /// Runs `f` against an empty buffer and returns what it wrote.
    ///
    /// Parameters keep accumulating in the shared list, so fragments
    /// captured in sequence are numbered in that sequence.
    pub fn capture<F>(&mut self, f: F) -> Result<String, BuildError>
    where
        F: FnOnce(&mut Self) -> Result<(), BuildError>,
    {
        let outer = std::mem::take(&mut self.sql);
        let result = f(self);
        let captured = std::mem::replace(&mut self.sql, outer);
        result.map(|_| captured)
    }

    pub fn render_list<T: Render>(
        &mut self,
        items: &[T],
        separator: &str,
    ) -> Result<(), BuildError> {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(separator);
            }
            item.render(self)?;
        }
        Ok(())
    }
}

/// Renders any node on its own, e.g. a condition tree for inspection.
pub fn render_fragment<T: Render + ?Sized>(
    node: &T,
    dialect: &dyn Dialect,
) -> Result<(String, Vec<Parameter>), BuildError> {
    let mut renderer = Renderer::new(dialect);
    node.render(&mut renderer)?;
    Ok(renderer.finish())
}

pub(crate) fn render_command<T: Render + ?Sized>(
    kind: StatementKind,
    node: &T,
    dialect: &dyn Dialect,
) -> Result<SqlCommand, BuildError> {
    let (text, parameters) = render_fragment(node, dialect)?;

    debug!(
        statement = %kind,
        dialect = %dialect.name(),
        parameters = parameters.len(),
        "Rendered statement"
    );
    trace!(sql = %text, "Statement text");

    Ok(SqlCommand {
        kind,
        text,
        parameters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{DialectKind, sqlserver::SqlServer};

    #[test]
    fn test_add_param_numbers_sequentially() {
        let dialect = SqlServer;
        let mut r = Renderer::new(&dialect);
        r.add_param(&Bind::new(1));
        r.sql.push(',');
        r.add_param(&Bind::new("two"));
        let (sql, params) = r.finish();

        assert_eq!(sql, "@PN_IDX_0,@PN_IDX_1");
        assert_eq!(params[1].name, "PN_IDX_1");
        assert_eq!(params[1].ordinal, 1);
    }

    #[test]
    fn test_capture_restores_outer_buffer() {
        let dialect = DialectKind::Postgres.dialect();
        let mut r = Renderer::new(dialect.as_ref());
        r.sql.push_str("outer ");

        let inner = r
            .capture(|r| {
                r.sql.push_str("inner ");
                r.add_param(&Bind::new(5));
                Ok(())
            })
            .unwrap();
        r.add_param(&Bind::new(6));

        assert_eq!(inner, "inner $1");
        assert_eq!(r.sql, "outer $2");
        assert_eq!(r.params.len(), 2);
    }

    #[test]
    fn test_capture_restores_buffer_on_error() {
        let dialect = SqlServer;
        let mut r = Renderer::new(&dialect);
        r.sql.push_str("kept");

        let result = r.capture(|r| {
            r.sql.push_str("discarded");
            Err(BuildError::unsupported("test", "anything"))
        });

        assert!(result.is_err());
        assert_eq!(r.sql, "kept");
    }
}
