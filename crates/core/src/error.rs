//! Error types for article loading and export-format selection.
//!
//! The pagination pipeline itself is total over its input domain and never
//! fails; errors only arise at the boundaries where articles are read in.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading articles or selecting a format.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read the article source.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The article record could not be deserialized.
    #[error("Invalid article record: {0}")]
    InvalidArticle(String),

    /// The requested export format name is not recognized.
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),
}
