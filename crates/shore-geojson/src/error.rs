//! Error types for GeoJSON loading and writing.

use thiserror::Error;

/// Result type alias using GeoJsonError.
pub type GeoJsonResult<T> = Result<T, GeoJsonError>;

/// Errors raised while reading or writing a feature collection.
///
/// These are the only fatal errors in the pipeline: a collection that cannot
/// be loaded aborts the batch before any processing begins. Malformed
/// individual features are not errors and never surface here.
#[derive(Debug, Error)]
pub enum GeoJsonError {
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

impl GeoJsonError {
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn parse(path: impl Into<String>, err: &serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
