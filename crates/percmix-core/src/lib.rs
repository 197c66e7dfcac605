//! Render graph, transport state and frame clock for loop playback.
//!
//! # Primary API
//!
//! - [`RenderGraph`] / [`MixBus`]: shared output bus every voice renders into
//! - [`PlaybackState`]: `Stopped | Playing(p) | Paused(p)`
//! - [`RepeatMode`]: none / once / N times / forever loop repetition
//! - [`DisplayLink`]: cancellable fixed-rate tick source driving the poll loop
//!
//! # Feature-gated APIs
//!
//! - `"device"`: CPAL audio output for [`GraphOutput::Device`]
//!
//! # Example
//!
//! ```ignore
//! use percmix_core::{GraphConfig, RenderGraph};
//!
//! let mut graph = RenderGraph::new(GraphConfig::default())?;
//! graph.attach(voice);
//! graph.start()?;
//! let block = graph.render(512);
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub use config::{GraphConfig, GraphOutput};

pub(crate) mod lockfree;
pub use lockfree::{AtomicFlag, AtomicFloat};

pub mod smooth;
pub use smooth::SmoothedValue;

pub mod transport;
pub use transport::{FramePosition, PlaybackState, RepeatAdvance, RepeatMode};

pub mod clock;
pub use clock::DisplayLink;

pub mod graph;
pub use graph::{GraphNode, MixBus, RenderGraph};

pub use fundsp::wave::Wave;
