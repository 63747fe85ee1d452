use thiserror::Error;

/// Custom error types for autotext
#[derive(Debug, Error)]
pub enum AutotextError {
    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Invalid word list {path}: {reason}")]
    WordList { path: String, reason: String },

    #[error("Suggestion worker is not running")]
    WorkerUnavailable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
