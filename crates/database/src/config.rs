use crate::error::DatabaseError;
use serde::{Deserialize, Serialize};
use statement::DialectKind;
use std::{fs, path::Path};

/// Connection settings read at bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConfig {
    /// Provider identifier, e.g. `System.Data.SqlClient` or `postgres`.
    pub provider: String,

    #[serde(default)]
    pub connection_string: Option<String>,
}

impl DatabaseConfig {
    pub fn new(provider: &str) -> Self {
        DatabaseConfig {
            provider: provider.to_string(),
            connection_string: None,
        }
    }

    pub fn with_connection_string(mut self, connection_string: &str) -> Self {
        self.connection_string = Some(connection_string.to_string());
        self
    }

    pub fn from_json(json: &str) -> Result<Self, DatabaseError> {
        let config: DatabaseConfig = serde_json::from_str(json)?;
        if config.provider.trim().is_empty() {
            return Err(DatabaseError::Config("`provider` must not be empty".into()));
        }
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Resolves the provider to a dialect.
    pub fn dialect_kind(&self) -> Result<DialectKind, DatabaseError> {
        DialectKind::from_provider(&self.provider)
            .ok_or_else(|| DatabaseError::UnsupportedProvider(self.provider.clone()))
    }
}
