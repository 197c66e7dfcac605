use crate::Track;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrument family. Ordering follows [`Category::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Mallets,
    Latin,
    Horns,
    Rhythm,
    Fill,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Mallets,
        Category::Latin,
        Category::Horns,
        Category::Rhythm,
        Category::Fill,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Mallets => "mallets",
            Category::Latin => "latin",
            Category::Horns => "horns",
            Category::Rhythm => "rhythm section",
            Category::Fill => "fill",
        }
    }

    /// Concrete tracks of this category in catalog order.
    pub fn tracks(&self) -> Vec<Track> {
        Track::catalog()
            .into_iter()
            .filter(|track| track.category() == *self)
            .collect()
    }

    /// Tracks grouped by instrument (raw id root), in catalog order. Both
    /// clave patterns form one group, every keys type another, and so on.
    pub fn display_groups(&self) -> Vec<Vec<Track>> {
        let mut groups: Vec<(&'static str, Vec<Track>)> = Vec::new();
        for track in self.tracks() {
            let root = track.raw_root();
            match groups.iter_mut().find(|(r, _)| *r == root) {
                Some((_, group)) => group.push(track),
                None => groups.push((root, vec![track])),
            }
        }
        groups.into_iter().map(|(_, group)| group).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
