//! Error types raised while loading reference data.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading or parsing reference data files.
#[derive(Debug, Error)]
pub enum DataError {
    /// Reading a reference data file failed.
    #[error("failed to read reference data from {path}")]
    Read {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Deserialising a reference data payload failed.
    #[error("failed to parse {operation}")]
    Parse {
        /// Description of the payload being parsed.
        operation: &'static str,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
