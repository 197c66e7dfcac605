//! The instrument catalog: every loop a mix can contain.
//!
//! Instruments are grouped by [`Category`]; [`Track`] is the closed union over
//! the groups and is the identity the mixer keys everything on. Each
//! concrete track maps to one audio asset through [`Track::asset_key`].
//!
//! ```
//! use percmix_catalog::{Category, Latin, ClaveConfig, Track};
//!
//! let clave = Track::Latin(Latin::Clave(ClaveConfig::ThreeTwo));
//! assert_eq!(clave.category(), Category::Latin);
//! assert_eq!(clave.asset_key(), "clave.3-2");
//! assert_eq!(clave.id().parse::<Track>().unwrap(), clave);
//! ```

mod category;
mod error;
mod group;
mod track;

pub use category::Category;
pub use error::ParseTrackError;
pub use group::{
    BassType, ClaveConfig, DrumFill, DrumsType, Fill, FillSound, Horns, KeysType, Latin, Mallets,
    Rhythm,
};
pub use track::Track;

/// Asset key of the silent loop used as the master clock.
pub const CLICK_ASSET_KEY: &str = "click";
