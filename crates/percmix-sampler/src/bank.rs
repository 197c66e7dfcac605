//! The full set of loop players, one per asset key.

use crate::assets::AssetSource;
use crate::node::PlayerNode;
use crate::player::PlayerResource;
use crate::Result;
use std::collections::BTreeMap;
use tracing::info;

/// Players created once at startup and kept for the life of the mixer.
#[derive(Debug, Default)]
pub struct PlayerBank {
    players: BTreeMap<String, PlayerResource>,
}

impl PlayerBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load one player per distinct key. Any missing or unreadable asset
    /// fails the whole load.
    pub fn load<'a>(
        source: &dyn AssetSource,
        keys: impl IntoIterator<Item = &'a str>,
        sample_rate: f64,
        pan_scale: f32,
    ) -> Result<Self> {
        let mut bank = Self::new();
        for key in keys {
            if bank.contains(key) {
                continue;
            }
            let player = load_player(source, key, sample_rate)?.with_pan_scale(pan_scale);
            bank.insert(player);
        }
        info!(players = bank.len(), "loaded player bank");
        Ok(bank)
    }

    pub fn insert(&mut self, player: PlayerResource) {
        self.players.insert(player.key().to_string(), player);
    }

    pub fn get(&self, key: &str) -> Option<&PlayerResource> {
        self.players.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut PlayerResource> {
        self.players.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.players.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.players.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerResource> {
        self.players.values()
    }
}

/// Load one asset into a fresh, muted player.
pub fn load_player(source: &dyn AssetSource, key: &str, sample_rate: f64) -> Result<PlayerResource> {
    let wave = source.load(key)?;
    Ok(PlayerResource::new(PlayerNode::new(key, Some(wave), sample_rate)))
}
