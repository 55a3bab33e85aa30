use crate::{
    ast::{
        common::Source,
        field::QueryField,
        join::JoinClause,
        select::Select,
    },
    dialect::SelectParts,
    error::BuildError,
    renderer::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) -> Result<(), BuildError> {
        // 1. Output fields
        let fields = r.capture(|r| {
            if self.fields.is_empty() {
                r.sql.push('*');
                Ok(())
            } else {
                r.render_list(&self.fields, ",")
            }
        })?;

        // 2. FROM, JOIN, WHERE, GROUP BY, HAVING
        let body = r.capture(|r| {
            r.sql.push_str("FROM ");
            self.source.render(r)?;

            for join in &self.joins {
                r.sql.push(' ');
                join.render(r)?;
            }

            if let Some(where_clause) = &self.where_clause {
                r.sql.push_str(" WHERE ");
                where_clause.render(r)?;
            }

            if !self.group_by.is_empty() {
                r.sql.push_str(" GROUP BY ");
                r.sql.push_str(&self.group_by.join(","));
            }

            if let Some(having) = &self.having {
                r.sql.push_str(" HAVING ");
                having.render(r)?;
            }
            Ok(())
        })?;

        // 3. ORDER BY and paging belong to the dialect
        let parts = SelectParts {
            distinct: self.distinct,
            fields,
            body,
            order_by: &self.order_by,
            page: self.page,
        };
        let sql = r.dialect.render_select(&parts)?;
        r.sql.push_str(&sql);
        Ok(())
    }
}

impl Render for Source {
    fn render(&self, r: &mut Renderer) -> Result<(), BuildError> {
        match self {
            Source::Table(name) => r.sql.push_str(name),
            Source::Subquery { select, alias } => {
                r.sql.push('(');
                select.render(r)?;
                r.sql.push_str(") AS ");
                r.sql.push_str(alias);
            }
        }
        Ok(())
    }
}

impl Render for QueryField {
    fn render(&self, r: &mut Renderer) -> Result<(), BuildError> {
        let alias = match self {
            QueryField::Column { column, alias } => {
                column.render(r)?;
                alias
            }
            QueryField::Aggregate {
                function,
                column,
                alias,
            } => {
                r.sql.push_str(function.name());
                r.sql.push('(');
                match column {
                    Some(column) => column.render(r)?,
                    None => r.sql.push('*'),
                }
                r.sql.push(')');
                alias
            }
            QueryField::Function { expr, alias } => {
                expr.render(r)?;
                alias
            }
            QueryField::Subquery { select, alias } => {
                r.sql.push('(');
                select.render(r)?;
                r.sql.push(')');
                alias
            }
            QueryField::Identity => {
                let expr = r.dialect.identity_expression()?;
                r.sql.push_str(expr);
                return Ok(());
            }
        };

        if let Some(alias) = alias {
            r.sql.push_str(" AS ");
            r.sql.push_str(alias);
        }
        Ok(())
    }
}

impl Render for JoinClause {
    fn render(&self, r: &mut Renderer) -> Result<(), BuildError> {
        if !r.dialect.supports_join(self.kind) {
            return Err(BuildError::unsupported(r.dialect.name(), self.kind.keyword()));
        }

        r.sql.push_str(self.kind.keyword());
        r.sql.push(' ');
        self.right.render(r)?;
        r.sql.push_str(&format!(
            " ON {}.{} = {}.{}",
            self.left_table,
            self.left_column,
            self.right.name(),
            self.right_column
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{
            common::{JoinKind, OrderByExpr, OrderDir, Source},
            condition::{CompareOp, Condition},
            expr::{AggregateFunction, Ident},
            field::QueryField,
            join::JoinClause,
            select::{Page, Select},
        },
        dialect::DialectKind,
        error::BuildError,
        renderer::render_fragment,
        value,
    };
    use model::core::value::Value;

    fn users() -> Select {
        Select::new(Source::Table("tbl_Users".into()))
    }

    fn column(name: &str) -> QueryField {
        QueryField::Column {
            column: Ident::new(name),
            alias: None,
        }
    }

    fn gt(column: &str, v: i64) -> Condition {
        Condition::Compare {
            column: Ident::new(column),
            op: CompareOp::Gt,
            right: value!(v),
        }
    }

    #[test]
    fn test_select_star() {
        let (text, params) =
            render_fragment(&users(), DialectKind::MySql.dialect().as_ref()).unwrap();
        assert_eq!(text, "SELECT * FROM tbl_Users");
        assert!(params.is_empty());
    }

    #[test]
    fn test_full_clause_order() {
        let mut select = users();
        select.distinct = true;
        select.fields = vec![
            column("GroupID"),
            QueryField::Aggregate {
                function: AggregateFunction::Count,
                column: None,
                alias: Some("Total".into()),
            },
        ];
        select.where_clause = Some(gt("Age", 18));
        select.group_by = vec!["GroupID".into()];
        select.having = Some(Condition::Compare {
            column: Ident::new("COUNT(*)"),
            op: CompareOp::Gt,
            right: value!(2),
        });
        select.order_by = vec![OrderByExpr {
            column: "GroupID".into(),
            direction: OrderDir::Asc,
        }];
        select.page = Page { size: 10, start: 20 };

        let (text, params) =
            render_fragment(&select, DialectKind::Postgres.dialect().as_ref()).unwrap();

        assert_eq!(
            text,
            "SELECT DISTINCT GroupID,COUNT(*) AS Total FROM tbl_Users WHERE Age > $1 \
             GROUP BY GroupID HAVING COUNT(*) > $2 ORDER BY GroupID ASC LIMIT 10 OFFSET 20"
        );
        assert_eq!(params[0].value, Value::Int(18));
        assert_eq!(params[1].value, Value::Int(2));
    }

    #[test]
    fn test_subquery_source_and_field() {
        let mut inner = users();
        inner.where_clause = Some(gt("Age", 18));

        let mut count = Select::new(Source::Table("tbl_Posts".into()));
        count.fields = vec![QueryField::Aggregate {
            function: AggregateFunction::Count,
            column: None,
            alias: None,
        }];
        count.where_clause = Some(gt("Score", 3));

        let mut outer = Select::new(Source::Subquery {
            select: Box::new(inner),
            alias: "Adults".into(),
        });
        outer.fields = vec![
            column("UserID"),
            QueryField::Subquery {
                select: Box::new(count),
                alias: Some("Posts".into()),
            },
        ];

        let (text, params) =
            render_fragment(&outer, DialectKind::SqlServer.dialect().as_ref()).unwrap();

        assert_eq!(
            text,
            "SELECT UserID,(SELECT COUNT(*) FROM tbl_Posts WHERE Score > @PN_IDX_0) AS Posts \
             FROM (SELECT * FROM tbl_Users WHERE Age > @PN_IDX_1) AS Adults"
        );
        assert_eq!(params[0].value, Value::Int(3));
        assert_eq!(params[1].value, Value::Int(18));
    }

    #[test]
    fn test_join_renders_on_clause() {
        let mut select = users();
        select.joins.push(JoinClause {
            kind: JoinKind::Left,
            left_table: "tbl_Users".into(),
            left_column: "GroupID".into(),
            right: Source::Table("tbl_Groups".into()),
            right_column: "ID".into(),
        });

        let (text, _) = render_fragment(&select, DialectKind::Sqlite.dialect().as_ref()).unwrap();
        assert_eq!(
            text,
            "SELECT * FROM tbl_Users LEFT JOIN tbl_Groups ON tbl_Users.GroupID = tbl_Groups.ID"
        );
    }

    #[test]
    fn test_unsupported_join_fails_at_render() {
        let mut select = users();
        select.joins.push(JoinClause {
            kind: JoinKind::Full,
            left_table: "tbl_Users".into(),
            left_column: "GroupID".into(),
            right: Source::Table("tbl_Groups".into()),
            right_column: "ID".into(),
        });

        let err = render_fragment(&select, DialectKind::MySql.dialect().as_ref()).unwrap_err();
        assert_eq!(err, BuildError::unsupported("MySQL", "FULL OUTER JOIN"));
        assert!(render_fragment(&select, DialectKind::Postgres.dialect().as_ref()).is_ok());
    }

    #[test]
    fn test_identity_field() {
        let mut select = Select::new(Source::Table("tbl_Users".into()));
        select.fields = vec![QueryField::Identity];

        let (text, _) =
            render_fragment(&select, DialectKind::SqlServer.dialect().as_ref()).unwrap();
        assert_eq!(text, "SELECT SCOPE_IDENTITY() FROM tbl_Users");

        let err = render_fragment(&select, DialectKind::Oracle.dialect().as_ref()).unwrap_err();
        assert!(matches!(err, BuildError::Unsupported { .. }));
    }
}
