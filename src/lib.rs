//! # percmix - loop-synchronized percussion mixer
//!
//! Assemble percussion loops into a [`Mix`] and play them back locked to one
//! playhead, with per-track mute, solo, volume and pan, scrubbing, and
//! repeat.
//!
//! ## Architecture
//!
//! percmix is an umbrella crate that coordinates:
//! - **percmix-core** - render graph, transport state, repeat descriptor,
//!   frame clock
//! - **percmix-sampler** - loop players and asset loading
//! - **percmix-catalog** - the instrument catalog ([`Track`])
//!
//! The [`Mixer`] owns one player per catalog asset plus a silent click that
//! serves as the master clock, and polls it once per [`DisplayLink`] frame.
//!
//! ## Quick Start
//!
//! ```ignore
//! use percmix::prelude::*;
//!
//! let mut mixer = Mixer::builder()
//!     .asset_dir("assets/loops")
//!     .output_device(None)
//!     .build()?;
//!
//! mixer.insert_track(Track::Mallets(Mallets::Marimba))?;
//! mixer.set_repeat_mode(RepeatMode::Forever);
//! mixer.play();
//!
//! let link = mixer.display_link();
//! link.run(|_| mixer.tick());
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - offline rendering only
//! - `device` - real-time output through CPAL

pub mod builder;
pub mod config;
pub mod error;
pub mod event;
pub mod mix;
pub mod mixer;
pub mod solo;

pub use builder::MixerBuilder;
pub use config::MixerConfig;
pub use error::{Error, Result};
pub use event::MixerEvent;
pub use mix::Mix;
pub use mixer::Mixer;
pub use solo::SoloMode;

/// Re-export of percmix-core for direct access
pub use percmix_core as core;
/// Re-export of percmix-sampler for direct access
pub use percmix_sampler as sampler;
/// Re-export of percmix-catalog for direct access
pub use percmix_catalog as catalog;

pub use percmix_catalog::{
    BassType, Category, ClaveConfig, DrumFill, DrumsType, Fill, FillSound, Horns, KeysType,
    Latin, Mallets, Rhythm, Track, CLICK_ASSET_KEY,
};
pub use percmix_core::{
    DisplayLink, FramePosition, GraphConfig, GraphOutput, PlaybackState, RenderGraph,
    RepeatMode,
};
pub use percmix_sampler::{AssetSource, DirectorySource, MemorySource, PlayerControls};

pub mod prelude {
    pub use crate::{
        Category, DirectorySource, Error, Fill, FillSound, MemorySource, Mix, Mixer,
        MixerConfig, MixerEvent, PlaybackState, RepeatMode, Result, SoloMode, Track,
    };
    pub use crate::{ClaveConfig, Horns, Latin, Mallets, Rhythm};
}
