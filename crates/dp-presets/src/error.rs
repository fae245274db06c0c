//! Error types for preset storage.

use thiserror::Error;

/// Result type for preset operations.
pub type PresetResult<T> = Result<T, PresetError>;

/// Errors that can occur while managing presets.
#[derive(Debug, Error)]
pub enum PresetError {
    /// No preset has the given id.
    #[error("preset '{0}' not found")]
    NotFound(String),

    /// A position outside the preset list.
    #[error("index {index} out of range for {len} presets")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// Number of presets in the list.
        len: usize,
    },

    /// A stored preset failed validation.
    #[error("invalid preset: {0}")]
    InvalidPreset(String),

    /// The backing store could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Preset data could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
