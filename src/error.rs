// Sensor error taxonomy. Every variant aborts the run; a missing state file is not an error.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SensorError {
    /// The metrics command could not be run, failed, or printed something that is not text.
    #[error("metrics source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("malformed metrics line {line_no}: {line:?}")]
    MalformedLine { line_no: usize, line: String },

    /// A channel definition does not fit the counter list it indexes into.
    #[error("channel configuration mismatch: {0}")]
    ConfigMismatch(String),

    #[error("state file {}: {source}", path.display())]
    StateIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("state file {} is not a valid snapshot: {source}", path.display())]
    StateFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("encode JSON: {0}")]
    Encode(#[from] serde_json::Error),
}
