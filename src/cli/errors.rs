use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot match pattern {pattern}: {source}")]
    PatternMatch {
        pattern: String,
        source: sbatchgen::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
