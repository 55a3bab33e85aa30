use crate::{
    ast::insert::Insert,
    error::BuildError,
    renderer::{Render, Renderer},
};
use tracing::warn;

impl Render for Insert {
    fn render(&self, r: &mut Renderer) -> Result<(), BuildError> {
        r.sql.push_str("INSERT INTO ");
        r.sql.push_str(&self.table);

        if self.columns.is_empty() {
            warn!(table = %self.table, "INSERT has no columns; rendering the bare prefix");
            return Ok(());
        }

        let names = self
            .columns
            .iter()
            .map(|c| c.column.as_str())
            .collect::<Vec<_>>()
            .join(",");
        r.sql.push_str(" ( ");
        r.sql.push_str(&names);
        r.sql.push_str(" ) VALUES ( ");

        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push(',');
            }
            column.value.render(r)?;
        }
        r.sql.push_str(" )");
        Ok(())
    }
}
