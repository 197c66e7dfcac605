//! Loop players for percmix.
//!
//! - [`PlayerNode`]: the voice the render graph mixes; schedulable as a full
//!   loop or a one-shot segment, with a render-time counter
//! - [`PlayerResource`]: control-side mute / volume / pan / solo memory
//! - [`PlayerBank`]: every player, keyed by asset key
//! - [`AssetSource`]: where decoded loops come from ([`DirectorySource`],
//!   [`MemorySource`])

pub mod assets;
pub mod bank;
pub mod error;
pub mod node;
pub mod player;

pub use assets::{decode_wav, wave_from_channels, AssetSource, DirectorySource, MemorySource};
pub use bank::{load_player, PlayerBank};
pub use error::{Error, Result};
pub use node::{PlayerNode, Schedule};
pub use player::{PlayerControls, PlayerResource};
