//! Error taxonomy for the page pipeline.
//!
//! Only failures that abort hydration live here. Missing sections and short records are not
//! errors; form validation failures are reported on the page, not raised.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures surfaced by content loading, configuration and output.
pub enum SiteError {
    #[error("Failed to fetch {location}: status {status}")]
    /// The content request completed without a success status.
    Fetch {
        /// What was requested.
        location: String,
        /// Status returned.
        status: u16,
    },
    #[error("Failed to read {}: {source}", .path.display())]
    /// The content file could not be read.
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    #[error("Configuration error: {0}")]
    /// The configuration file exists but could not be used.
    Config(String),
    #[error("Serialization error: {0}")]
    /// Output could not be serialised.
    Serialize(#[from] serde_json::Error),
}
