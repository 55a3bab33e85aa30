use crate::{
    ast::expr::LogicalFunction,
    dialect::{Dialect, DialectKind},
    error::BuildError,
};

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn kind(&self) -> DialectKind {
        DialectKind::Postgres
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }

    fn placeholder(&self, _name: &str, ordinal: usize) -> String {
        // PostgreSQL uses $1, $2, etc.
        format!("${}", ordinal + 1)
    }

    fn translate_function(&self, function: LogicalFunction) -> &'static str {
        match function {
            LogicalFunction::Now => "NOW()",
            LogicalFunction::Length => "LENGTH",
            LogicalFunction::Upper => "UPPER",
            LogicalFunction::Lower => "LOWER",
        }
    }

    fn identity_expression(&self) -> Result<&'static str, BuildError> {
        Ok("LASTVAL()")
    }
}
