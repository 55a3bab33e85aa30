//! Fluent SQL statement construction with dialect-aware rendering.
//!
//! Builders accumulate a dialect-agnostic AST. Rendering walks that AST
//! once, asks the bound [`Dialect`] for every backend-specific fragment and
//! yields the SQL text together with its parameters in placeholder order.

pub mod ast;
pub mod builder;
pub mod dialect;
pub mod error;
pub mod macros;
pub mod param;
pub mod renderer;

pub use builder::{
    Statement,
    condition::ConditionBuilder,
    delete::DeleteStatement,
    insert::InsertStatement,
    select::{JoinTarget, SelectStatement},
    update::UpdateStatement,
};
pub use dialect::{Dialect, DialectKind};
pub use error::BuildError;
pub use param::{Parameter, SqlCommand, StatementKind};
