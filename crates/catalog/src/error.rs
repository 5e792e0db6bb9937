//! Error types for catalog loading.

use thiserror::Error;

/// Errors raised while loading a word catalog.
///
/// All variants are recoverable at the boundary: the caller keeps an empty
/// catalog and surfaces the failure without terminating the host.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The data file is not valid JSON or not the expected shape.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The file parsed but no entry survived validation.
    #[error("catalog contains no usable words")]
    Empty,
}

/// A convenience `Result` type alias using the crate's `CatalogError` type.
pub type Result<T> = std::result::Result<T, CatalogError>;
