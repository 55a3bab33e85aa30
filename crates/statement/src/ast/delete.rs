use crate::ast::condition::Condition;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delete {
    pub table: String,
    pub where_clause: Option<Condition>,
}
