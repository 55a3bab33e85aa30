use crate::ast::common::{JoinKind, Source};

/// `<kind> <right> ON <left_table>.<left_column> = <right>.<right_column>`
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub kind: JoinKind,
    pub left_table: String,
    pub left_column: String,
    pub right: Source,
    pub right_column: String,
}
