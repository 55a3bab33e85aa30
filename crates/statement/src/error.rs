use thiserror::Error;

/// Errors raised while building or rendering a statement.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A builder method was called with an argument outside its contract.
    #[error("Contract violation: `{argument}` {constraint}")]
    ContractViolation {
        argument: &'static str,
        constraint: String,
    },

    /// The active dialect has no way to express the requested construct.
    #[error("{feature} is not supported by {dialect}")]
    Unsupported { dialect: String, feature: String },
}

impl BuildError {
    pub fn contract(argument: &'static str, constraint: impl Into<String>) -> Self {
        BuildError::ContractViolation {
            argument,
            constraint: constraint.into(),
        }
    }

    pub fn unsupported(dialect: impl Into<String>, feature: impl Into<String>) -> Self {
        BuildError::Unsupported {
            dialect: dialect.into(),
            feature: feature.into(),
        }
    }
}
