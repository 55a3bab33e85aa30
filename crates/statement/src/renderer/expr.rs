use crate::{
    ast::expr::{ArithmeticOp, Expr, FunctionCall, FunctionName, Ident, RawPart, RawSql},
    error::BuildError,
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) -> Result<(), BuildError> {
        match self {
            Expr::Column(ident) => ident.render(r),
            Expr::Bind(bind) => {
                r.add_param(bind);
                Ok(())
            }
            Expr::Function(func) => func.render(r),
            Expr::Raw(raw) => raw.render(r),
            Expr::Subquery(select) => {
                r.sql.push('(');
                select.render(r)?;
                r.sql.push(')');
                Ok(())
            }
            Expr::Arithmetic { left, op, right } => {
                left.render(r)?;
                r.sql.push(match op {
                    ArithmeticOp::Add => '+',
                    ArithmeticOp::Sub => '-',
                });
                right.render(r)
            }
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) -> Result<(), BuildError> {
        if let Some(qualifier) = &self.qualifier {
            r.sql.push_str(qualifier);
            r.sql.push('.');
        }
        r.sql.push_str(&self.name);
        Ok(())
    }
}

impl Render for FunctionCall {
    fn render(&self, r: &mut Renderer) -> Result<(), BuildError> {
        match &self.name {
            FunctionName::Logical(function) => {
                r.sql.push_str(r.dialect.translate_function(*function));
                if function.is_niladic() {
                    return Ok(());
                }
            }
            FunctionName::Named(name) => r.sql.push_str(name),
        }

        r.sql.push('(');
        r.render_list(&self.args, ",")?;
        r.sql.push(')');
        Ok(())
    }
}

impl Render for RawSql {
    fn render(&self, r: &mut Renderer) -> Result<(), BuildError> {
        for part in &self.parts {
            match part {
                RawPart::Text(text) => r.sql.push_str(text),
                RawPart::Bind(bind) => r.add_param(bind),
            }
        }
        Ok(())
    }
}
