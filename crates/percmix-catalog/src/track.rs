use crate::{Category, Fill, FillSound, Horns, Latin, Mallets, ParseTrackError, Rhythm};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity of one catalog instrument.
///
/// Ordering is catalog order: by category, then by variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Track {
    Mallets(Mallets),
    Latin(Latin),
    Horns(Horns),
    Rhythm(Rhythm),
    Fill(Fill),
}

impl Track {
    /// Every selectable track, in catalog order. Surprise instances are not
    /// listed; see [`Track::surprise`].
    pub fn catalog() -> Vec<Track> {
        Mallets::ALL
            .into_iter()
            .map(Track::Mallets)
            .chain(Latin::ALL.into_iter().map(Track::Latin))
            .chain(Horns::ALL.into_iter().map(Track::Horns))
            .chain(Rhythm::ALL.into_iter().map(Track::Rhythm))
            .chain(Fill::ALL.into_iter().map(Track::Fill))
            .collect()
    }

    /// Surprise fill that currently resolves to `sound`.
    pub fn surprise(sound: FillSound) -> Track {
        Track::Fill(Fill::Surprise(sound))
    }

    pub fn category(&self) -> Category {
        match self {
            Track::Mallets(_) => Category::Mallets,
            Track::Latin(_) => Category::Latin,
            Track::Horns(_) => Category::Horns,
            Track::Rhythm(_) => Category::Rhythm,
            Track::Fill(_) => Category::Fill,
        }
    }

    /// Key of the loop asset this track plays. Distinct tracks may share a
    /// key: a surprise plays its resolved fill's loop.
    pub fn asset_key(&self) -> &'static str {
        match self {
            Track::Mallets(m) => m.asset_key(),
            Track::Latin(l) => l.asset_key(),
            Track::Horns(h) => h.asset_key(),
            Track::Rhythm(r) => r.asset_key(),
            Track::Fill(f) => f.asset_key(),
        }
    }

    /// Id within the category, `root` or `root.suffix`.
    pub fn raw_id(&self) -> &'static str {
        match self {
            Track::Mallets(m) => m.raw_id(),
            Track::Latin(l) => l.raw_id(),
            Track::Horns(h) => h.raw_id(),
            Track::Rhythm(r) => r.raw_id(),
            Track::Fill(f) => f.raw_id(),
        }
    }

    pub(crate) fn raw_root(&self) -> &'static str {
        let raw = self.raw_id();
        raw.split_once('.').map_or(raw, |(root, _)| root)
    }

    /// Stable string id, `<category label>.<raw id>`. Round-trips through
    /// [`FromStr`].
    pub fn id(&self) -> String {
        format!("{}.{}", self.category().label(), self.raw_id())
    }

    pub fn is_surprise(&self) -> bool {
        matches!(self, Track::Fill(fill) if fill.is_surprise())
    }

    pub fn fill(&self) -> Option<Fill> {
        match *self {
            Track::Fill(fill) => Some(fill),
            _ => None,
        }
    }

    /// Name shown inside its category picker, e.g. `acoustic drums`.
    pub fn label(&self) -> String {
        match self {
            Track::Rhythm(Rhythm::Keys(keys)) => keys.raw().to_string(),
            Track::Rhythm(Rhythm::Bass(bass)) => format!("{} bass", bass.raw()),
            Track::Rhythm(Rhythm::Drums(drums)) => format!("{} drums", drums.raw()),
            Track::Fill(Fill::Sound(FillSound::Drums(drums))) => format!("{} drums", drums.raw()),
            Track::Fill(Fill::Surprise(_)) => "surprise".to_string(),
            _ => self.raw_id().replacen('.', " ", 1),
        }
    }

    /// Name shown in the mix's track list, where fills are marked as such.
    pub fn display_name(&self) -> String {
        match self {
            Track::Fill(Fill::Sound(FillSound::Guitar | FillSound::Drums(_))) => {
                format!("{} (fill)", self.label())
            }
            _ => self.label(),
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl FromStr for Track {
    type Err = ParseTrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Track::catalog()
            .into_iter()
            .chain(FillSound::ALL.into_iter().map(Track::surprise))
            .find(|track| track.id() == s)
            .ok_or_else(|| ParseTrackError(s.to_string()))
    }
}
