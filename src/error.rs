//! Error taxonomy for a scrape run.
//!
//! Every variant is terminal: the run logs it and stops at the step that
//! failed. A field missing from the markup is never an error.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while fetching, parsing, or writing results.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The HTTP client could not be built or the request did not complete.
    #[error("Network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: wreq::Error,
    },

    /// The response body could not be read into a document.
    #[error("Failed to parse HTML from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: wreq::Error,
    },

    /// An output file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Records could not be serialized to JSON.
    #[error("Failed to encode records as JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ScrapeError {
    /// Short name of the failed step, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ScrapeError::Network { .. } => "network",
            ScrapeError::Parse { .. } => "parse",
            ScrapeError::Io { .. } => "io",
            ScrapeError::Encode(_) => "encode",
        }
    }
}

/// Result alias for scrape operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;
