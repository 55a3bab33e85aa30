use crate::{
    ast::update::Update,
    error::BuildError,
    renderer::{Render, Renderer},
};
use tracing::warn;

impl Render for Update {
    fn render(&self, r: &mut Renderer) -> Result<(), BuildError> {
        r.sql.push_str("UPDATE ");
        r.sql.push_str(&self.table);

        if self.assignments.is_empty() {
            warn!(table = %self.table, "UPDATE has no assignments");
        } else {
            r.sql.push_str(" SET ");
            for (i, assignment) in self.assignments.iter().enumerate() {
                if i > 0 {
                    r.sql.push(',');
                }
                r.sql.push_str(&assignment.column);
                r.sql.push('=');
                assignment.value.render(r)?;
            }
        }

        if let Some(where_clause) = &self.where_clause {
            r.sql.push_str(" WHERE ");
            where_clause.render(r)?;
        }
        Ok(())
    }
}
