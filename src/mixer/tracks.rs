//! Active track set changes and the surprise fill re-roll.

use super::Mixer;
use crate::{Error, Mix, MixerEvent, Result};
use percmix_catalog::{Category, FillSound, Track};
use percmix_core::transport::clamp_playable;
use percmix_core::PlaybackState;
use percmix_sampler::PlayerResource;
use rand::Rng;
use tracing::{debug, warn};

impl Mixer {
    /// The player behind `track`.
    pub fn player(&self, track: &Track) -> Result<&PlayerResource> {
        self.bank
            .get(track.asset_key())
            .ok_or(Error::UnknownTrack(*track))
    }

    pub(super) fn player_mut(&mut self, track: &Track) -> Result<&mut PlayerResource> {
        self.bank
            .get_mut(track.asset_key())
            .ok_or(Error::UnknownTrack(*track))
    }

    /// Add `track` to the mix, unmuted, in step with the current transport.
    ///
    /// While playing the player is armed at the published playhead and
    /// started at once; while paused it is armed at the paused position;
    /// while stopped it is armed from the top. A player already sounding for
    /// another active track is left running. Returns `false` when the track
    /// was already in the mix.
    pub fn insert_track(&mut self, track: Track) -> Result<bool> {
        let key = track.asset_key();
        if !self.bank.contains(key) {
            return Err(Error::UnknownTrack(track));
        }
        if !self.mix.insert(track) {
            return Ok(false);
        }

        let shared = self.mix.shares_asset(key, &track);
        let state = match self.state {
            PlaybackState::Playing(_) => {
                PlaybackState::Playing(clamp_playable(self.playhead, self.duration_frames()))
            }
            state => state,
        };
        let soloed_out = self.solo.is_on() && !self.solo_covers(key);

        let player = self.player_mut(&track)?;
        if !shared {
            match state {
                PlaybackState::Playing(position) => {
                    player.halt();
                    player.schedule(Some(position));
                    player.apply(&state);
                }
                _ => player.apply(&state),
            }
        }
        player.set_muted(false);
        if soloed_out {
            player.remember_solo_mute();
            player.set_muted(true);
        }

        debug!(track = %track.id(), ?state, shared, "track inserted");
        self.events.emit(MixerEvent::TrackInserted(track));
        Ok(true)
    }

    /// Add a surprise fill resolved to a random fill sound. Returns the
    /// drawn track, or `None` when that surprise was already in the mix.
    pub fn insert_surprise(&mut self) -> Result<Option<Track>> {
        let track = self.draw_surprise();
        Ok(self.insert_track(track)?.then_some(track))
    }

    fn draw_surprise(&mut self) -> Track {
        let index = self.rng.gen_range(0..FillSound::ALL.len());
        Track::surprise(FillSound::ALL[index])
    }

    /// Take `track` out of the mix and silence its player, unless another
    /// active track plays from the same asset. Returns `false` when the
    /// track was not in the mix.
    pub fn remove_track(&mut self, track: &Track) -> bool {
        if !self.mix.remove(track) {
            return false;
        }
        let key = track.asset_key();
        if !self.mix.shares_asset(key, track) {
            if let Some(player) = self.bank.get_mut(key) {
                player.halt();
                player.clear_solo_snapshot();
            }
        }

        debug!(track = %track.id(), "track removed");
        self.events.emit(MixerEvent::TrackRemoved(*track));
        true
    }

    /// Replace the whole mix. New tracks are inserted before departing ones
    /// are removed, so a player shared across the change keeps sounding.
    pub fn set_mix(&mut self, mix: Mix) -> Result<()> {
        if let Some(track) = mix.iter().find(|t| !self.bank.contains(t.asset_key())) {
            return Err(Error::UnknownTrack(*track));
        }

        for track in mix.iter() {
            self.insert_track(*track)?;
        }
        let departing: Vec<Track> = self
            .mix
            .iter()
            .filter(|t| !mix.contains(t))
            .copied()
            .collect();
        for track in departing {
            self.remove_track(&track);
        }
        Ok(())
    }

    /// Any solo member plays from asset `key`.
    pub(super) fn solo_covers(&self, key: &str) -> bool {
        self.solo.tracks().iter().any(|t| t.asset_key() == key)
    }

    /// When the only fill in the mix is a surprise, swap it for a fresh draw
    /// that inherits its mix settings and solo membership.
    pub(super) fn reroll_surprise(&mut self) {
        let fills: Vec<Track> = self.mix.in_category(Category::Fill).copied().collect();
        let [old] = fills.as_slice() else {
            return;
        };
        let old = *old;
        if !old.is_surprise() {
            return;
        }
        let new = self.draw_surprise();

        self.mix.remove(&old);
        self.mix.insert(new);
        if self.solo.remove(&old) {
            self.solo.insert(new);
        }

        if old.asset_key() != new.asset_key() {
            let controls = match self.bank.get(old.asset_key()) {
                Some(player) => player.controls(),
                None => {
                    warn!(track = %old.id(), "surprise fill has no player");
                    return;
                }
            };
            if let Some(player) = self.bank.get_mut(old.asset_key()) {
                player.halt();
                player.clear_solo_snapshot();
            }
            let state = self.state;
            if let Some(player) = self.bank.get_mut(new.asset_key()) {
                player.set_controls(controls);
                player.apply(&state);
            }
        }

        debug!(from = %old.id(), to = %new.id(), "surprise fill re-rolled");
        self.events
            .emit(MixerEvent::SurpriseRerolled { from: old, to: new });
    }
}
