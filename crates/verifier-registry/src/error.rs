// Registry error types

use thiserror::Error;

/// Registry error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate content id: {0}")]
    DuplicateContentId(String),

    #[error("Model not found: {0}")]
    NotFound(String),

    #[error("Deployment failed: {0}")]
    DeploymentFailed(String),

    #[error("Model name must be present")]
    EmptyModelName,
}

/// Registry result type
pub type Result<T> = std::result::Result<T, RegistryError>;
