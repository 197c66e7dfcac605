//! Mixer configuration.

use crate::{Error, Result};
use percmix_core::GraphConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a [`Mixer`](crate::Mixer).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MixerConfig {
    /// Playhead poll rate, 30-240 Hz.
    pub poll_rate_hz: f64,
    /// Display span of the pan control at full deflection.
    pub pan_scale: f32,
    pub graph: GraphConfig,
    /// Seed for surprise draws. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Directory holding `<asset key>.wav` files, used when no asset source
    /// is given to the builder.
    pub asset_dir: Option<PathBuf>,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            poll_rate_hz: 60.0,
            pan_scale: 135.0,
            graph: GraphConfig::default(),
            seed: None,
            asset_dir: None,
        }
    }
}

impl MixerConfig {
    pub fn validate(&self) -> Result<()> {
        if !(30.0..=240.0).contains(&self.poll_rate_hz) {
            return Err(Error::InvalidConfig(format!(
                "poll_rate_hz {} out of range (30-240 Hz)",
                self.poll_rate_hz
            )));
        }
        if !self.pan_scale.is_finite() || self.pan_scale <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "pan_scale {} must be positive",
                self.pan_scale
            )));
        }
        self.graph.validate()?;
        Ok(())
    }
}
