//! Error types for the library layer.

use std::io;
use std::path::PathBuf;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding storage and input validation failures.
///
/// Every variant is terminal for the current run: the pipeline never
/// retries, and the series file is only written after a fully successful
/// merge. Re-running the process is the retry mechanism.
#[derive(Debug, thiserror::Error)]
pub enum NavFeedError {
    /// The series file exists but could not be read or written.
    /// A missing file is not an error; it reads as an empty series.
    #[error("series file {path} is unavailable: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The series file exists but its contents do not parse as a price series.
    #[error("series file {path} is corrupt: {reason}")]
    MalformedStoredData { path: PathBuf, reason: String },
    /// An upstream observation is missing required fields or carries a date
    /// that does not parse in the expected source format.
    #[error("malformed upstream data: {0}")]
    MalformedInput(String),
    /// JSON serialization failed while writing the series.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// An error from the underlying API client.
    #[error("API error: {0}")]
    Api(#[from] vanguard_api::Error),
}
