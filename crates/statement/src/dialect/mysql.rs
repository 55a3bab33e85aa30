use crate::{
    ast::{common::JoinKind, expr::LogicalFunction, select::Page},
    dialect::{Dialect, DialectKind},
    error::BuildError,
};

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn kind(&self) -> DialectKind {
        DialectKind::MySql
    }

    fn name(&self) -> String {
        "MySQL".into()
    }

    fn placeholder(&self, _name: &str, _ordinal: usize) -> String {
        // MySQL uses ?
        "?".into()
    }

    fn translate_function(&self, function: LogicalFunction) -> &'static str {
        match function {
            LogicalFunction::Now => "NOW()",
            LogicalFunction::Length => "CHAR_LENGTH",
            LogicalFunction::Upper => "UPPER",
            LogicalFunction::Lower => "LOWER",
        }
    }

    fn identity_expression(&self) -> Result<&'static str, BuildError> {
        Ok("LAST_INSERT_ID()")
    }

    fn supports_join(&self, kind: JoinKind) -> bool {
        kind != JoinKind::Full
    }

    fn limit_clause(&self, page: Page) -> String {
        match (page.size, page.start) {
            (0, 0) => String::new(),
            (size, 0) => format!(" LIMIT {size}"),
            // MySQL has no OFFSET without LIMIT; use the documented maximum.
            (0, start) => format!(" LIMIT 18446744073709551615 OFFSET {start}"),
            (size, start) => format!(" LIMIT {size} OFFSET {start}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_placeholder() {
        assert_eq!(MySql.placeholder("PN_IDX_0", 0), "?");
        assert_eq!(MySql.placeholder("PN_IDX_9", 9), "?");
    }

    #[test]
    fn test_offset_without_size() {
        assert_eq!(
            MySql.limit_clause(Page { size: 0, start: 20 }),
            " LIMIT 18446744073709551615 OFFSET 20"
        );
        assert_eq!(
            MySql.limit_clause(Page { size: 5, start: 10 }),
            " LIMIT 5 OFFSET 10"
        );
    }

    #[test]
    fn test_full_join_unsupported() {
        assert!(!MySql.supports_join(JoinKind::Full));
        assert!(MySql.supports_join(JoinKind::Right));
    }
}
