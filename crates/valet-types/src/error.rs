use thiserror::Error;

use crate::llm::LlmError;

/// Errors from repository operations (used by trait definitions in valet-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from the chat orchestrator.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("no message provided")]
    EmptyMessage,

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),

    #[error("completion service error: {0}")]
    Completion(#[from] LlmError),
}

/// Errors constructing the application configuration at startup. Fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}
