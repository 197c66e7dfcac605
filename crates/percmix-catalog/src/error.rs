use thiserror::Error;

/// A track id that names no catalog instrument.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown track id: {0}")]
pub struct ParseTrackError(pub String);
