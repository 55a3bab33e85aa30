use crate::ast::{common::Assignment, condition::Condition};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    pub table: String,
    pub assignments: Vec<Assignment>,
    pub where_clause: Option<Condition>,
}
