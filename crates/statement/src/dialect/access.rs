use crate::{
    ast::{common::JoinKind, expr::LogicalFunction},
    dialect::{Dialect, DialectKind, SelectParts},
    error::BuildError,
};

#[derive(Debug, Clone)]
pub struct Access;

impl Dialect for Access {
    fn kind(&self) -> DialectKind {
        DialectKind::Access
    }

    fn name(&self) -> String {
        "Access".into()
    }

    fn placeholder(&self, _name: &str, _ordinal: usize) -> String {
        "?".into()
    }

    fn translate_function(&self, function: LogicalFunction) -> &'static str {
        match function {
            LogicalFunction::Now => "NOW()",
            LogicalFunction::Length => "LEN",
            LogicalFunction::Upper => "UCASE",
            LogicalFunction::Lower => "LCASE",
        }
    }

    fn identity_expression(&self) -> Result<&'static str, BuildError> {
        Ok("@@IDENTITY")
    }

    fn supports_join(&self, kind: JoinKind) -> bool {
        kind != JoinKind::Full
    }

    /// Access only knows `TOP`. An offset is emulated by taking the first
    /// `start + size` rows, keeping the last `size` of them through the
    /// reversed ordering, and restoring the requested order outside.
    fn render_select(&self, parts: &SelectParts<'_>) -> Result<String, BuildError> {
        let page = parts.page;
        if page.start == 0 {
            if page.size == 0 {
                return Ok(parts.plain());
            }
            return Ok(parts.with_prefix(&format!("TOP {} ", page.size)));
        }

        if parts.order_by.is_empty() {
            return Err(BuildError::unsupported(
                self.name(),
                "Paging with a record offset and no ORDER BY",
            ));
        }
        if page.size == 0 {
            return Err(BuildError::unsupported(
                self.name(),
                "Paging with a record offset and no page size",
            ));
        }

        let inner = parts.with_prefix(&format!("TOP {} ", page.end()?));
        Ok(format!(
            "SELECT * FROM (SELECT TOP {} * FROM ({}) AS PN_INNER{}) AS PN_OUTER{}",
            page.size,
            inner,
            parts.reversed_order_clause(),
            parts.order_clause()
        ))
    }
}
