//! The set of tracks playing together.

use percmix_catalog::{Category, Track};
use std::collections::BTreeSet;

/// Active tracks of a mix. Iterates in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mix {
    tracks: BTreeSet<Track>,
}

impl Mix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracks(&self) -> &BTreeSet<Track> {
        &self.tracks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn contains(&self, track: &Track) -> bool {
        self.tracks.contains(track)
    }

    /// Returns `false` when the track was already present.
    pub fn insert(&mut self, track: Track) -> bool {
        self.tracks.insert(track)
    }

    pub fn remove(&mut self, track: &Track) -> bool {
        self.tracks.remove(track)
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(move |t| t.category() == category)
    }

    /// Any active track other than `except` plays from asset `key`.
    pub fn shares_asset(&self, key: &str, except: &Track) -> bool {
        self.tracks
            .iter()
            .any(|t| t != except && t.asset_key() == key)
    }

    /// Replace the selection within one category, leaving the others alone.
    /// Tracks of other categories in `selection` are ignored.
    pub fn with_category(&self, category: Category, selection: &[Track]) -> Mix {
        let mut next = self.clone();
        next.tracks.retain(|t| t.category() != category);
        next.tracks.extend(
            selection
                .iter()
                .copied()
                .filter(|t| t.category() == category),
        );
        next
    }
}

impl FromIterator<Track> for Mix {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        Self {
            tracks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Mix {
    type Item = &'a Track;
    type IntoIter = std::collections::btree_set::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
