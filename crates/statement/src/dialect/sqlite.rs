use crate::{
    ast::{common::JoinKind, expr::LogicalFunction, select::Page},
    dialect::{Dialect, DialectKind},
    error::BuildError,
};

#[derive(Debug, Clone)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn kind(&self) -> DialectKind {
        DialectKind::Sqlite
    }

    fn name(&self) -> String {
        "SQLite".into()
    }

    fn placeholder(&self, name: &str, _ordinal: usize) -> String {
        format!("@{name}")
    }

    fn translate_function(&self, function: LogicalFunction) -> &'static str {
        match function {
            LogicalFunction::Now => "DATETIME('NOW')",
            LogicalFunction::Length => "LENGTH",
            LogicalFunction::Upper => "UPPER",
            LogicalFunction::Lower => "LOWER",
        }
    }

    fn identity_expression(&self) -> Result<&'static str, BuildError> {
        Ok("LAST_INSERT_ROWID()")
    }

    fn supports_join(&self, kind: JoinKind) -> bool {
        matches!(kind, JoinKind::Inner | JoinKind::Left)
    }

    fn limit_clause(&self, page: Page) -> String {
        match (page.size, page.start) {
            (0, 0) => String::new(),
            (size, 0) => format!(" LIMIT {size}"),
            (0, start) => format!(" LIMIT -1 OFFSET {start}"),
            (size, start) => format!(" LIMIT {size} OFFSET {start}"),
        }
    }
}
