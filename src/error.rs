//! Error types for scene configuration and frame recording.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for hillwaves operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or recording a scene.
///
/// Contract violations inside the simulator itself (bad grid dimensions,
/// out-of-range cells) are not represented here; they panic.
#[derive(Error, Debug)]
pub enum Error {
    /// A parameter is outside its valid range.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParams { name: &'static str, reason: String },

    /// Parameter file could not be read.
    #[error("Failed to read parameter file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parameter file is not valid JSON for the expected schema.
    #[error("Failed to parse parameter file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Heightmap frame could not be encoded or written.
    #[error("Failed to save frame {path}: {source}")]
    FrameWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            name,
            reason: reason.into(),
        }
    }
}
