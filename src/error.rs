//! Centralized error type for the percmix umbrella crate.
//!
//! Wraps the subsystem errors so `?` propagates across crate boundaries.

use percmix_catalog::Track;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] percmix_core::Error),

    #[error("Sampler: {0}")]
    Sampler(#[from] percmix_sampler::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("No player for track {} (asset '{}')", .0.id(), .0.asset_key())]
    UnknownTrack(Track),
}

pub type Result<T> = std::result::Result<T, Error>;
