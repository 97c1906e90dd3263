//! Error types for loading and checking batches.

use hitkit_intersect::GeometryError;
use thiserror::Error;

/// Errors that can occur while loading settings or a batch file.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Reading a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Batch file is not valid JSON or has the wrong shape.
    #[error("invalid batch file: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file is not valid TOML or has the wrong shape.
    #[error("invalid settings file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Settings parsed but hold an unusable value.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A primitive failed validation.
    #[error("primitive {index} ({kind}): {source}")]
    InvalidPrimitive {
        /// Position in the batch.
        index: usize,
        /// Shape kind.
        kind: &'static str,
        /// Underlying geometry error.
        #[source]
        source: GeometryError,
    },

    /// A ray failed validation.
    #[error("ray {index}: {source}")]
    InvalidRay {
        /// Position in the batch.
        index: usize,
        /// Underlying geometry error.
        #[source]
        source: GeometryError,
    },
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CheckError>;
