//! Render graph configuration.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Where the render graph sends its output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GraphOutput {
    /// Rendered on demand through [`RenderGraph::render`](crate::RenderGraph::render).
    Offline,
    /// Rendered by a CPAL output stream. `None` selects the default device.
    Device { index: Option<usize> },
}

/// Configuration for the render graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    pub sample_rate: f64,
    pub output: GraphOutput,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100.0,
            output: GraphOutput::Offline,
        }
    }
}

impl GraphConfig {
    pub fn offline(sample_rate: f64) -> Self {
        Self {
            sample_rate,
            output: GraphOutput::Offline,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(8000.0..=384000.0).contains(&self.sample_rate) {
            return Err(Error::InvalidConfig(format!(
                "sample_rate {} out of range (8000-384000 Hz)",
                self.sample_rate
            )));
        }
        Ok(())
    }
}
