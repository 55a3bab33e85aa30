use crate::{
    ast::delete::Delete,
    error::BuildError,
    renderer::{Render, Renderer},
};

impl Render for Delete {
    fn render(&self, r: &mut Renderer) -> Result<(), BuildError> {
        r.sql.push_str("DELETE FROM ");
        r.sql.push_str(&self.table);

        if let Some(where_clause) = &self.where_clause {
            r.sql.push_str(" WHERE ");
            where_clause.render(r)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{
            condition::{CompareOp, Condition},
            delete::Delete,
            expr::Ident,
        },
        dialect::DialectKind,
        renderer::render_fragment,
        value,
    };

    #[test]
    fn test_delete_with_and_without_where() {
        let mut delete = Delete {
            table: "tbl_Users".into(),
            where_clause: None,
        };
        let dialect = DialectKind::MySql.dialect();

        let (text, _) = render_fragment(&delete, dialect.as_ref()).unwrap();
        assert_eq!(text, "DELETE FROM tbl_Users");

        delete.where_clause = Some(Condition::Compare {
            column: Ident::new("UserID"),
            op: CompareOp::LtEq,
            right: value!(100),
        });
        let (text, params) = render_fragment(&delete, dialect.as_ref()).unwrap();
        assert_eq!(text, "DELETE FROM tbl_Users WHERE UserID <= ?");
        assert_eq!(params[0].name, "PN_IDX_0");
    }
}
