//! Instrument groups, one enum per [`Category`](crate::Category).
//!
//! Every group exposes the same three facts per variant: `ALL` in catalog
//! order, a raw id (`root` or `root.suffix`) and the asset key of its loop.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mallets {
    Marimba,
    Vibraphone,
}

impl Mallets {
    pub const ALL: [Mallets; 2] = [Mallets::Marimba, Mallets::Vibraphone];

    pub fn raw_id(&self) -> &'static str {
        match self {
            Mallets::Marimba => "marimba",
            Mallets::Vibraphone => "vibes",
        }
    }

    pub fn asset_key(&self) -> &'static str {
        match self {
            Mallets::Marimba => "marimba",
            Mallets::Vibraphone => "vibraphone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClaveConfig {
    ThreeTwo,
    TwoThree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Latin {
    Agogo,
    Bongos,
    Cabasa,
    Clave(ClaveConfig),
    Cowbell,
    Guiro,
    Shaker,
    Triangle,
}

impl Latin {
    pub const ALL: [Latin; 9] = [
        Latin::Agogo,
        Latin::Bongos,
        Latin::Cabasa,
        Latin::Clave(ClaveConfig::ThreeTwo),
        Latin::Clave(ClaveConfig::TwoThree),
        Latin::Cowbell,
        Latin::Guiro,
        Latin::Shaker,
        Latin::Triangle,
    ];

    pub fn raw_id(&self) -> &'static str {
        match self {
            Latin::Agogo => "agogo",
            Latin::Bongos => "bongos",
            Latin::Cabasa => "cabasa",
            Latin::Clave(ClaveConfig::ThreeTwo) => "clave.3-2",
            Latin::Clave(ClaveConfig::TwoThree) => "clave.2-3",
            Latin::Cowbell => "cowbell",
            Latin::Guiro => "guiro",
            Latin::Shaker => "shaker",
            Latin::Triangle => "triangle",
        }
    }

    pub fn asset_key(&self) -> &'static str {
        self.raw_id()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Horns {
    Section,
    Trumpet,
}

impl Horns {
    pub const ALL: [Horns; 2] = [Horns::Section, Horns::Trumpet];

    pub fn raw_id(&self) -> &'static str {
        match self {
            Horns::Section => "horn section",
            Horns::Trumpet => "trumpet",
        }
    }

    pub fn asset_key(&self) -> &'static str {
        match self {
            Horns::Section => "horns",
            Horns::Trumpet => "trumpet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KeysType {
    Ep,
    Piano,
    Wurlitzer,
}

impl KeysType {
    pub fn raw(&self) -> &'static str {
        match self {
            KeysType::Ep => "EP",
            KeysType::Piano => "piano",
            KeysType::Wurlitzer => "wurlie",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BassType {
    Electric,
    Synth,
}

impl BassType {
    pub fn raw(&self) -> &'static str {
        match self {
            BassType::Electric => "electric",
            BassType::Synth => "synth",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DrumsType {
    Acoustic,
    Club,
}

impl DrumsType {
    pub fn raw(&self) -> &'static str {
        match self {
            DrumsType::Acoustic => "acoustic",
            DrumsType::Club => "club",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rhythm {
    Guitar,
    Keys(KeysType),
    Bass(BassType),
    Drums(DrumsType),
}

impl Rhythm {
    pub const ALL: [Rhythm; 8] = [
        Rhythm::Guitar,
        Rhythm::Keys(KeysType::Ep),
        Rhythm::Keys(KeysType::Piano),
        Rhythm::Keys(KeysType::Wurlitzer),
        Rhythm::Bass(BassType::Electric),
        Rhythm::Bass(BassType::Synth),
        Rhythm::Drums(DrumsType::Acoustic),
        Rhythm::Drums(DrumsType::Club),
    ];

    pub fn raw_id(&self) -> &'static str {
        match self {
            Rhythm::Guitar => "guitar",
            Rhythm::Keys(KeysType::Ep) => "keys.EP",
            Rhythm::Keys(KeysType::Piano) => "keys.piano",
            Rhythm::Keys(KeysType::Wurlitzer) => "keys.wurlie",
            Rhythm::Bass(BassType::Electric) => "bass.electric",
            Rhythm::Bass(BassType::Synth) => "bass.synth",
            Rhythm::Drums(DrumsType::Acoustic) => "drums.acoustic",
            Rhythm::Drums(DrumsType::Club) => "drums.club",
        }
    }

    pub fn asset_key(&self) -> &'static str {
        self.raw_id()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DrumFill {
    Acoustic,
    Electric,
}

impl DrumFill {
    pub fn raw(&self) -> &'static str {
        match self {
            DrumFill::Acoustic => "acoustic",
            DrumFill::Electric => "electric",
        }
    }
}

/// A concrete fill loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FillSound {
    Drums(DrumFill),
    Glock,
    Guitar,
    Vibraslap,
}

impl FillSound {
    pub const ALL: [FillSound; 5] = [
        FillSound::Drums(DrumFill::Acoustic),
        FillSound::Drums(DrumFill::Electric),
        FillSound::Glock,
        FillSound::Guitar,
        FillSound::Vibraslap,
    ];

    pub fn raw_id(&self) -> &'static str {
        match self {
            FillSound::Drums(DrumFill::Acoustic) => "drums.acoustic",
            FillSound::Drums(DrumFill::Electric) => "drums.electric",
            FillSound::Glock => "glock",
            FillSound::Guitar => "guitar",
            FillSound::Vibraslap => "vibraslap",
        }
    }

    pub fn asset_key(&self) -> &'static str {
        match self {
            FillSound::Drums(DrumFill::Acoustic) => "fill.drums.acoustic",
            FillSound::Drums(DrumFill::Electric) => "fill.drums.electric",
            FillSound::Glock => "fill.glock",
            FillSound::Guitar => "fill.guitar",
            FillSound::Vibraslap => "fill.vibraslap",
        }
    }
}

/// A fill slot: either a chosen fill, or a surprise that plays one fill per
/// pass of the loop and draws a new one at every loop boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Fill {
    Sound(FillSound),
    Surprise(FillSound),
}

impl Fill {
    /// Selectable fills. Surprise instances are resolved at runtime and are
    /// not listed.
    pub const ALL: [Fill; 5] = [
        Fill::Sound(FillSound::Drums(DrumFill::Acoustic)),
        Fill::Sound(FillSound::Drums(DrumFill::Electric)),
        Fill::Sound(FillSound::Glock),
        Fill::Sound(FillSound::Guitar),
        Fill::Sound(FillSound::Vibraslap),
    ];

    pub fn sound(&self) -> FillSound {
        match *self {
            Fill::Sound(sound) | Fill::Surprise(sound) => sound,
        }
    }

    pub fn is_surprise(&self) -> bool {
        matches!(self, Fill::Surprise(_))
    }

    pub fn raw_id(&self) -> &'static str {
        match self {
            Fill::Sound(sound) => sound.raw_id(),
            Fill::Surprise(FillSound::Drums(DrumFill::Acoustic)) => "surprise.drums.acoustic",
            Fill::Surprise(FillSound::Drums(DrumFill::Electric)) => "surprise.drums.electric",
            Fill::Surprise(FillSound::Glock) => "surprise.glock",
            Fill::Surprise(FillSound::Guitar) => "surprise.guitar",
            Fill::Surprise(FillSound::Vibraslap) => "surprise.vibraslap",
        }
    }

    /// A surprise plays through the loop of the fill it resolved to.
    pub fn asset_key(&self) -> &'static str {
        self.sound().asset_key()
    }
}
