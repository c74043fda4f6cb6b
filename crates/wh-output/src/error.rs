//! Error types for wh-output.

use thiserror::Error;

/// Errors that can occur when exporting an animation.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("agent count mismatch: {routes} routes, {paths} paths, {sequences} frame sequences")]
    AgentCountMismatch { routes: usize, paths: usize, sequences: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "json")]
    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
