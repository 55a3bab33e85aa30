use statement::BuildError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The provider identifier does not name a supported backend.
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read the configuration file: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("Failed to parse the configuration file: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The statement could not be rendered for the active dialect.
    #[error("Statement build error: {0}")]
    Build(#[from] BuildError),

    /// Reported by the executor.
    #[error("Execution error: {0}")]
    Execution(String),

    #[error("Unexpected result: {0}")]
    UnexpectedResult(String),
}
