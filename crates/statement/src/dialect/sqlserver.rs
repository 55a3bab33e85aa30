use crate::{
    ast::expr::LogicalFunction,
    dialect::{Dialect, DialectKind, SelectParts},
    error::BuildError,
};

#[derive(Debug, Clone)]
pub struct SqlServer;

impl Dialect for SqlServer {
    fn kind(&self) -> DialectKind {
        DialectKind::SqlServer
    }

    fn name(&self) -> String {
        "SQL Server".into()
    }

    fn placeholder(&self, name: &str, _ordinal: usize) -> String {
        format!("@{name}")
    }

    fn translate_function(&self, function: LogicalFunction) -> &'static str {
        match function {
            LogicalFunction::Now => "GETDATE()",
            LogicalFunction::Length => "LEN",
            LogicalFunction::Upper => "UPPER",
            LogicalFunction::Lower => "LOWER",
        }
    }

    fn identity_expression(&self) -> Result<&'static str, BuildError> {
        Ok("SCOPE_IDENTITY()")
    }

    fn render_select(&self, parts: &SelectParts<'_>) -> Result<String, BuildError> {
        let page = parts.page;
        if page.start == 0 {
            if page.size == 0 {
                return Ok(parts.plain());
            }
            return Ok(parts.with_prefix(&format!("TOP {} ", page.size)));
        }

        // ROW_NUMBER needs an ordering; fall back to an arbitrary one.
        let over = if parts.order_by.is_empty() {
            "(SELECT NULL)".to_string()
        } else {
            parts.order_list(false)
        };

        // Row numbers are unique, so DISTINCT has to run before numbering.
        let numbered = if parts.distinct {
            format!(
                "SELECT *,ROW_NUMBER() OVER (ORDER BY {over}) AS PN_ROW_NUMBER \
                 FROM ({}{} {}) AS PN_DISTINCT",
                parts.head(),
                parts.fields,
                parts.body
            )
        } else {
            format!(
                "{}{},ROW_NUMBER() OVER (ORDER BY {over}) AS PN_ROW_NUMBER {}",
                parts.head(),
                parts.fields,
                parts.body
            )
        };

        let mut sql = format!(
            "SELECT * FROM ({numbered}) AS PN_PAGED WHERE PN_ROW_NUMBER > {}",
            page.start
        );
        if page.size > 0 {
            sql.push_str(&format!(" AND PN_ROW_NUMBER <= {}", page.end()?));
        }
        sql.push_str(" ORDER BY PN_ROW_NUMBER");
        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        common::{OrderByExpr, OrderDir},
        select::Page,
    };

    fn order() -> Vec<OrderByExpr> {
        vec![OrderByExpr {
            column: "UserID".into(),
            direction: OrderDir::Desc,
        }]
    }

    fn parts(order_by: &[OrderByExpr], page: Page) -> SelectParts<'_> {
        SelectParts {
            distinct: false,
            fields: "UserID,UserName".to_string(),
            body: "FROM tbl_Users WHERE (Age > @PN_IDX_0)".to_string(),
            order_by,
            page,
        }
    }

    #[test]
    fn test_placeholder_uses_name() {
        assert_eq!(SqlServer.placeholder("PN_IDX_4", 4), "@PN_IDX_4");
    }

    #[test]
    fn test_top_without_offset() {
        let order_by = order();
        let sql = SqlServer
            .render_select(&parts(&order_by, Page { size: 5, start: 0 }))
            .unwrap();

        assert_eq!(
            sql,
            "SELECT TOP 5 UserID,UserName FROM tbl_Users WHERE (Age > @PN_IDX_0) ORDER BY UserID DESC"
        );
    }

    #[test]
    fn test_row_number_with_offset() {
        let order_by = order();
        let sql = SqlServer
            .render_select(&parts(&order_by, Page { size: 5, start: 10 }))
            .unwrap();

        assert_eq!(
            sql,
            "SELECT * FROM (SELECT UserID,UserName,ROW_NUMBER() OVER (ORDER BY UserID DESC) AS PN_ROW_NUMBER \
             FROM tbl_Users WHERE (Age > @PN_IDX_0)) AS PN_PAGED \
             WHERE PN_ROW_NUMBER > 10 AND PN_ROW_NUMBER <= 15 ORDER BY PN_ROW_NUMBER"
        );
    }

    #[test]
    fn test_row_number_without_order_or_size() {
        let sql = SqlServer
            .render_select(&parts(&[], Page { size: 0, start: 3 }))
            .unwrap();

        assert!(sql.contains("OVER (ORDER BY (SELECT NULL))"));
        assert!(sql.ends_with("WHERE PN_ROW_NUMBER > 3 ORDER BY PN_ROW_NUMBER"));
    }

    #[test]
    fn test_distinct_is_applied_before_numbering() {
        let order_by = order();
        let mut parts = parts(&order_by, Page { size: 5, start: 10 });
        parts.distinct = true;

        let sql = SqlServer.render_select(&parts).unwrap();

        assert_eq!(
            sql,
            "SELECT * FROM (SELECT *,ROW_NUMBER() OVER (ORDER BY UserID DESC) AS PN_ROW_NUMBER \
             FROM (SELECT DISTINCT UserID,UserName FROM tbl_Users WHERE (Age > @PN_IDX_0)) AS PN_DISTINCT) \
             AS PN_PAGED WHERE PN_ROW_NUMBER > 10 AND PN_ROW_NUMBER <= 15 ORDER BY PN_ROW_NUMBER"
        );
    }

    #[test]
    fn test_window_end_overflow_is_an_error() {
        let order_by = order();
        let err = SqlServer
            .render_select(&parts(&order_by, Page { size: usize::MAX, start: 1 }))
            .unwrap_err();

        assert!(matches!(err, BuildError::ContractViolation { argument: "page", .. }));
    }
}
