//! Dialect-agnostic syntax tree for the four statement kinds.

pub mod common;
pub mod condition;
pub mod delete;
pub mod expr;
pub mod field;
pub mod insert;
pub mod join;
pub mod select;
pub mod update;
