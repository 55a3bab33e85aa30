//! Provider resolution, statement factory and the execution boundary.
//!
//! A [`Database`] is bound to one dialect, resolved once from a provider
//! identifier. It hands out statements already bound to that dialect and
//! drives an [`Executor`] for the common read and write shortcuts.

pub mod config;
pub mod database;
pub mod error;
pub mod executor;

#[cfg(test)]
mod tests;

pub use config::DatabaseConfig;
pub use database::Database;
pub use error::DatabaseError;
pub use executor::Executor;
