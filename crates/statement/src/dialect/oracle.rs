use crate::{
    ast::expr::LogicalFunction,
    dialect::{Dialect, DialectKind, SelectParts},
    error::BuildError,
};

#[derive(Debug, Clone)]
pub struct Oracle;

impl Dialect for Oracle {
    fn kind(&self) -> DialectKind {
        DialectKind::Oracle
    }

    fn name(&self) -> String {
        "Oracle".into()
    }

    fn placeholder(&self, name: &str, _ordinal: usize) -> String {
        format!(":{name}")
    }

    fn translate_function(&self, function: LogicalFunction) -> &'static str {
        match function {
            LogicalFunction::Now => "SYSDATE",
            LogicalFunction::Length => "LENGTH",
            LogicalFunction::Upper => "UPPER",
            LogicalFunction::Lower => "LOWER",
        }
    }

    fn identity_expression(&self) -> Result<&'static str, BuildError> {
        // Generated keys come from sequences, which are per table.
        Err(BuildError::unsupported(self.name(), "Identity retrieval"))
    }

    fn render_select(&self, parts: &SelectParts<'_>) -> Result<String, BuildError> {
        let inner = parts.plain();
        let page = parts.page;

        let sql = match (page.size, page.start) {
            (0, 0) => inner,
            (size, 0) => format!("SELECT * FROM ({inner}) WHERE ROWNUM <= {size}"),
            (0, start) => format!(
                "SELECT * FROM (SELECT PN_T.*,ROWNUM PN_RN FROM ({inner}) PN_T) WHERE PN_RN > {start}"
            ),
            (_, start) => format!(
                "SELECT * FROM (SELECT PN_T.*,ROWNUM PN_RN FROM ({inner}) PN_T \
                 WHERE ROWNUM <= {}) WHERE PN_RN > {start}",
                page.end()?
            ),
        };
        Ok(sql)
    }
}
