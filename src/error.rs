//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, glob, and directory-walk errors, and provides semantic
//! variants for validation failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] globset::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error(
        "Number of paired filenames ({paired}) is not equal to number of regular filenames ({primary})"
    )]
    PairedCountMismatch { primary: usize, paired: usize },
}
