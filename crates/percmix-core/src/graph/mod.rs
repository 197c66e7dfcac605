//! Render graph: every voice attached to one output bus, started and stopped
//! as a whole.

mod bus;
pub use bus::{GraphNode, MixBus};

#[cfg(feature = "device")]
mod output;

use crate::{GraphConfig, GraphOutput, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Owns the output bus and, when configured for a device, the output stream.
pub struct RenderGraph {
    bus: MixBus,
    config: GraphConfig,
    sample_rate: f64,
    running: bool,
    #[cfg(feature = "device")]
    device: Option<output::DeviceOutput>,
}

impl RenderGraph {
    pub fn new(config: GraphConfig) -> Result<Self> {
        config.validate()?;
        #[cfg(not(feature = "device"))]
        if matches!(config.output, GraphOutput::Device { .. }) {
            return Err(crate::Error::DeviceUnsupported);
        }

        Ok(Self {
            bus: MixBus::new(),
            sample_rate: config.sample_rate,
            config,
            running: false,
            #[cfg(feature = "device")]
            device: None,
        })
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Sample rate the graph renders at. For device output this is the
    /// device's rate once started.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn bus(&self) -> &MixBus {
        &self.bus
    }

    /// Attach a voice to the output bus. Attaching the same voice twice is a
    /// no-op.
    pub fn attach(&self, node: Arc<dyn GraphNode>) {
        let id = node.node_id();
        if self.bus.attach(node) {
            debug!(node = id, "attached voice");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) -> Result<()> {
        if self.running {
            return Ok(());
        }

        match self.config.output {
            GraphOutput::Offline => {}
            GraphOutput::Device { index } => self.open_device(index)?,
        }

        self.running = true;
        info!(
            sample_rate = self.sample_rate,
            voices = self.bus.len(),
            "render graph started"
        );
        Ok(())
    }

    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        #[cfg(feature = "device")]
        {
            self.device = None;
        }
        self.running = false;
        info!("render graph stopped");
    }

    /// Render `frames` frames of interleaved stereo.
    ///
    /// Only an offline graph renders here; a stopped graph or one driven by
    /// a device stream returns silence and leaves every voice untouched.
    pub fn render(&self, frames: usize) -> Vec<f32> {
        let mut output = vec![0.0; frames * 2];
        self.render_into(&mut output);
        output
    }

    pub fn render_into(&self, output: &mut [f32]) {
        if !self.running || self.config.output != GraphOutput::Offline {
            output.fill(0.0);
            return;
        }
        self.bus.render(output);
    }

    #[cfg(feature = "device")]
    fn open_device(&mut self, index: Option<usize>) -> Result<()> {
        let device = output::DeviceOutput::start(index, self.bus.clone())?;
        self.sample_rate = device.sample_rate();
        self.device = Some(device);
        Ok(())
    }

    #[cfg(not(feature = "device"))]
    fn open_device(&mut self, _index: Option<usize>) -> Result<()> {
        Err(crate::Error::DeviceUnsupported)
    }
}

impl Drop for RenderGraph {
    fn drop(&mut self) {
        self.stop();
    }
}

/// List output devices as `"<index>: <name>"`.
#[cfg(feature = "device")]
pub fn list_devices() -> Result<Vec<String>> {
    output::list_devices()
}
