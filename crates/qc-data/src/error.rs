//! Error types for quote retrieval.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for retrieval operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while fetching a quote payload.
#[derive(Debug, Error)]
pub enum DataError {
    /// A local payload file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A remote payload could not be retrieved.
    #[error("failed to fetch {url}: {source}")]
    Http {
        /// The URL that failed.
        url: String,
        /// Underlying HTTP error.
        source: reqwest::Error,
    },

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
