//! Error types.

use thiserror::Error;

/// Error type.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No asset stored under the key.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// The asset exists but could not be decoded.
    #[error("Failed to decode asset '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: hound::Error,
    },

    /// The asset decoded to zero frames.
    #[error("Asset '{0}' contains no audio")]
    EmptyAsset(String),
}

/// Result type.
pub type Result<T> = std::result::Result<T, Error>;
