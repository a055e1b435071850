use thiserror::Error;

/// Core error type shared across Personagen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested profile count is zero or negative.
    #[error("invalid profile count: {0}")]
    InvalidCount(i64),
    /// No fields were selected for generation.
    #[error("no fields selected")]
    EmptySelection,
    /// Tabular encoding needs at least one record to infer columns.
    #[error("cannot encode an empty batch")]
    EmptyBatch,
    /// The destination write failed; nothing is assumed written.
    #[error("write failure: {0}")]
    WriteFailure(#[from] std::io::Error),
    /// An encoder met a value kind it has no encoding rule for.
    #[error("no encoding rule for scalar kind '{0}'")]
    UnsupportedScalar(String),
}

/// Convenience alias for results returned by Personagen crates.
pub type Result<T> = std::result::Result<T, Error>;
