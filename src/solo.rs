//! Solo membership.

use percmix_catalog::Track;
use std::collections::BTreeSet;

/// Whether solo is engaged, and which tracks are soloed. Membership survives
/// switching solo off and on again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoloMode {
    Off(BTreeSet<Track>),
    On(BTreeSet<Track>),
}

impl Default for SoloMode {
    fn default() -> Self {
        SoloMode::Off(BTreeSet::new())
    }
}

impl SoloMode {
    pub fn is_on(&self) -> bool {
        matches!(self, SoloMode::On(_))
    }

    pub fn tracks(&self) -> &BTreeSet<Track> {
        match self {
            SoloMode::Off(tracks) | SoloMode::On(tracks) => tracks,
        }
    }

    fn tracks_mut(&mut self) -> &mut BTreeSet<Track> {
        match self {
            SoloMode::Off(tracks) | SoloMode::On(tracks) => tracks,
        }
    }

    pub fn contains(&self, track: &Track) -> bool {
        self.tracks().contains(track)
    }

    pub fn insert(&mut self, track: Track) -> bool {
        self.tracks_mut().insert(track)
    }

    pub fn remove(&mut self, track: &Track) -> bool {
        self.tracks_mut().remove(track)
    }

    pub fn toggle(&mut self) {
        let tracks = std::mem::take(self.tracks_mut());
        *self = match self {
            SoloMode::Off(_) => SoloMode::On(tracks),
            SoloMode::On(_) => SoloMode::Off(tracks),
        };
    }
}
