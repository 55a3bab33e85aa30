//! Factory for condition tree leaves.
//!
//! Values passed to a helper become bound parameters. Columns may be
//! qualified as `table.column`.

use crate::{
    ast::{
        condition::{CompareOp, Condition, InList},
        expr::{Bind, Expr, RawSql},
    },
    builder::{parse_ident, select::SelectStatement},
};
use model::core::value::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionBuilder;

impl ConditionBuilder {
    /// `column <op> value`, binding `value`.
    pub fn compare(&self, column: &str, op: CompareOp, value: impl Into<Value>) -> Condition {
        let ident = parse_ident(column);
        let bind = Bind::for_column(&ident.name, None, value);
        Condition::Compare {
            column: ident,
            op,
            right: Expr::Bind(bind),
        }
    }

    /// `column <op> expr` for functions, raw fragments and other columns.
    pub fn compare_expr(&self, column: &str, op: CompareOp, expr: impl Into<Expr>) -> Condition {
        Condition::Compare {
            column: parse_ident(column),
            op,
            right: expr.into(),
        }
    }

    /// `column <op> (SELECT ...)`
    pub fn compare_select(
        &self,
        column: &str,
        op: CompareOp,
        select: SelectStatement,
    ) -> Condition {
        self.compare_expr(column, op, Expr::Subquery(Box::new(select.build())))
    }

    pub fn equal(&self, column: &str, value: impl Into<Value>) -> Condition {
        self.compare(column, CompareOp::Eq, value)
    }

    pub fn not_equal(&self, column: &str, value: impl Into<Value>) -> Condition {
        self.compare(column, CompareOp::NotEq, value)
    }

    pub fn greater_than(&self, column: &str, value: impl Into<Value>) -> Condition {
        self.compare(column, CompareOp::Gt, value)
    }

    pub fn greater_than_or_equal(&self, column: &str, value: impl Into<Value>) -> Condition {
        self.compare(column, CompareOp::GtEq, value)
    }

    pub fn less_than(&self, column: &str, value: impl Into<Value>) -> Condition {
        self.compare(column, CompareOp::Lt, value)
    }

    pub fn less_than_or_equal(&self, column: &str, value: impl Into<Value>) -> Condition {
        self.compare(column, CompareOp::LtEq, value)
    }

    /// Column-to-column equality; binds nothing.
    pub fn equal_column(&self, column: &str, other: &str) -> Condition {
        self.compare_expr(column, CompareOp::Eq, Expr::Column(parse_ident(other)))
    }

    pub fn between(
        &self,
        column: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Condition {
        self.range(column, low.into(), high.into(), false)
    }

    pub fn not_between(
        &self,
        column: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Condition {
        self.range(column, low.into(), high.into(), true)
    }

    /// `column IN (...)`. An empty list renders as an always-false predicate.
    pub fn in_list<I, V>(&self, column: &str, values: I) -> Condition
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.values_in(column, values, false)
    }

    pub fn not_in_list<I, V>(&self, column: &str, values: I) -> Condition
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.values_in(column, values, true)
    }

    pub fn in_select(&self, column: &str, select: SelectStatement) -> Condition {
        Condition::In {
            column: parse_ident(column),
            list: InList::Subquery(Box::new(select.build())),
            negated: false,
        }
    }

    pub fn not_in_select(&self, column: &str, select: SelectStatement) -> Condition {
        Condition::In {
            column: parse_ident(column),
            list: InList::Subquery(Box::new(select.build())),
            negated: true,
        }
    }

    /// `column LIKE pattern`; the pattern is bound as given.
    pub fn like(&self, column: &str, pattern: &str) -> Condition {
        self.pattern(column, pattern.to_string(), false)
    }

    pub fn not_like(&self, column: &str, pattern: &str) -> Condition {
        self.pattern(column, pattern.to_string(), true)
    }

    pub fn contains(&self, column: &str, text: &str) -> Condition {
        self.pattern(column, format!("%{text}%"), false)
    }

    pub fn starts_with(&self, column: &str, text: &str) -> Condition {
        self.pattern(column, format!("{text}%"), false)
    }

    pub fn ends_with(&self, column: &str, text: &str) -> Condition {
        self.pattern(column, format!("%{text}"), false)
    }

    pub fn is_null(&self, column: &str) -> Condition {
        Condition::Null {
            column: parse_ident(column),
            negated: false,
        }
    }

    pub fn is_not_null(&self, column: &str) -> Condition {
        Condition::Null {
            column: parse_ident(column),
            negated: true,
        }
    }

    /// Inserted verbatim. The caller owns its injection safety.
    pub fn raw(&self, sql: RawSql) -> Condition {
        Condition::Raw(sql)
    }

    fn range(&self, column: &str, low: Value, high: Value, negated: bool) -> Condition {
        let ident = parse_ident(column);
        Condition::Between {
            low: Expr::Bind(Bind::for_column(&ident.name, None, low)),
            high: Expr::Bind(Bind::for_column(&ident.name, None, high)),
            column: ident,
            negated,
        }
    }

    fn values_in<I, V>(&self, column: &str, values: I, negated: bool) -> Condition
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let ident = parse_ident(column);
        let list = values
            .into_iter()
            .map(|v| Expr::Bind(Bind::for_column(&ident.name, None, v)))
            .collect();
        Condition::In {
            column: ident,
            list: InList::Values(list),
            negated,
        }
    }

    fn pattern(&self, column: &str, pattern: String, negated: bool) -> Condition {
        let ident = parse_ident(column);
        Condition::Like {
            pattern: Expr::Bind(Bind::for_column(&ident.name, None, pattern)),
            column: ident,
            negated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::expr::FunctionCall, dialect::DialectKind, raw, renderer::render_fragment};

    const C: ConditionBuilder = ConditionBuilder;

    fn text(cond: &Condition) -> String {
        render_fragment(cond, DialectKind::SqlServer.dialect().as_ref())
            .unwrap()
            .0
    }

    #[test]
    fn test_comparison_helpers() {
        assert_eq!(text(&C.equal("UserID", 1)), "UserID = @PN_IDX_0");
        assert_eq!(text(&C.not_equal("UserID", 1)), "UserID <> @PN_IDX_0");
        assert_eq!(text(&C.greater_than_or_equal("Age", 18)), "Age >= @PN_IDX_0");
        assert_eq!(text(&C.less_than("Age", 65)), "Age < @PN_IDX_0");
        assert_eq!(
            text(&C.equal_column("tbl_Users.GroupID", "tbl_Groups.ID")),
            "tbl_Users.GroupID = tbl_Groups.ID"
        );
    }

    #[test]
    fn test_bound_parameter_remembers_column() {
        let (_, params) = render_fragment(
            &C.equal("tbl_Users.UserName", "mays"),
            DialectKind::SqlServer.dialect().as_ref(),
        )
        .unwrap();

        assert_eq!(params[0].column.as_deref(), Some("UserName"));
        assert_eq!(params[0].value, Value::from("mays"));
    }

    #[test]
    fn test_like_patterns() {
        let (_, params) = render_fragment(
            &C.contains("UserName", "ay")
                .and(C.starts_with("UserName", "m"))
                .and(C.ends_with("UserName", "s")),
            DialectKind::SqlServer.dialect().as_ref(),
        )
        .unwrap();

        let patterns: Vec<_> = params.into_iter().map(|p| p.value).collect();
        assert_eq!(
            patterns,
            vec![Value::from("%ay%"), Value::from("m%"), Value::from("%s")]
        );
        assert_eq!(text(&C.not_like("UserName", "a_")), "UserName NOT LIKE @PN_IDX_0");
    }

    #[test]
    fn test_in_and_between() {
        assert_eq!(
            text(&C.in_list("UserID", [1, 2])),
            "UserID IN (@PN_IDX_0,@PN_IDX_1)"
        );
        assert_eq!(text(&C.not_in_list("UserID", Vec::<i64>::new())), "1=1");
        assert_eq!(
            text(&C.between("Age", 18, 65)),
            "Age BETWEEN @PN_IDX_0 AND @PN_IDX_1"
        );
    }

    #[test]
    fn test_compare_against_function_and_raw() {
        assert_eq!(
            text(&C.compare_expr("LastLogin", CompareOp::Lt, FunctionCall::now())),
            "LastLogin < GETDATE()"
        );
        assert_eq!(
            text(&C.raw(raw!("Flags & ", 4, " = 4"))),
            "Flags & @PN_IDX_0 = 4"
        );
    }

    #[test]
    fn test_all_and_any() {
        let all = Condition::all([C.is_null("A"), C.is_not_null("B"), C.equal("C", 1)]).unwrap();
        assert_eq!(
            text(&all),
            "((A IS NULL) AND (B IS NOT NULL)) AND (C = @PN_IDX_0)"
        );
        assert!(Condition::any(Vec::new()).is_none());
    }
}
