use crate::{
    ast::condition::{Condition, InList},
    error::BuildError,
    renderer::{Render, Renderer},
};
use tracing::warn;

impl Render for Condition {
    fn render(&self, r: &mut Renderer) -> Result<(), BuildError> {
        match self {
            Condition::Compare { column, op, right } => {
                column.render(r)?;
                r.sql.push(' ');
                r.sql.push_str(op.symbol());
                r.sql.push(' ');
                right.render(r)
            }
            Condition::Between {
                column,
                low,
                high,
                negated,
            } => {
                column.render(r)?;
                r.sql
                    .push_str(if *negated { " NOT BETWEEN " } else { " BETWEEN " });
                low.render(r)?;
                r.sql.push_str(" AND ");
                high.render(r)
            }
            Condition::In {
                column,
                list,
                negated,
            } => {
                if let InList::Values(values) = list
                    && values.is_empty()
                {
                    // An empty set matches nothing; its complement matches everything.
                    warn!(column = %column.name, negated, "IN list is empty");
                    r.sql.push_str(if *negated { "1=1" } else { "1=0" });
                    return Ok(());
                }

                column.render(r)?;
                r.sql.push_str(if *negated { " NOT IN (" } else { " IN (" });
                match list {
                    InList::Values(values) => r.render_list(values, ",")?,
                    InList::Subquery(select) => select.render(r)?,
                }
                r.sql.push(')');
                Ok(())
            }
            Condition::Like {
                column,
                pattern,
                negated,
            } => {
                column.render(r)?;
                r.sql.push_str(if *negated { " NOT LIKE " } else { " LIKE " });
                pattern.render(r)
            }
            Condition::Null { column, negated } => {
                column.render(r)?;
                r.sql
                    .push_str(if *negated { " IS NOT NULL" } else { " IS NULL" });
                Ok(())
            }
            Condition::And(left, right) => render_group(r, left, "AND", right),
            Condition::Or(left, right) => render_group(r, left, "OR", right),
            Condition::Not(inner) => {
                r.sql.push_str("NOT (");
                inner.render(r)?;
                r.sql.push(')');
                Ok(())
            }
            Condition::Raw(raw) => raw.render(r),
        }
    }
}

/// `(left) <op> (right)`; both sides are always wrapped.
fn render_group(
    r: &mut Renderer,
    left: &Condition,
    op: &str,
    right: &Condition,
) -> Result<(), BuildError> {
    r.sql.push('(');
    left.render(r)?;
    r.sql.push_str(") ");
    r.sql.push_str(op);
    r.sql.push_str(" (");
    right.render(r)?;
    r.sql.push(')');
    Ok(())
}
