//! Solo, per-track mix controls and repeat.

use super::Mixer;
use crate::{MixerEvent, Result, SoloMode};
use percmix_catalog::Track;
use percmix_core::RepeatMode;
use percmix_sampler::PlayerControls;
use tracing::debug;

impl Mixer {
    // --- solo ---

    /// Flip solo on or off, keeping membership.
    ///
    /// Turning solo on records every active player's mute flag, then mutes
    /// the players no member plays through. Turning it off puts back exactly
    /// the recorded flags.
    pub fn toggle_solo(&mut self) {
        self.solo.toggle();
        if self.solo.is_on() {
            self.engage_solo();
        } else {
            self.release_solo();
        }
        debug!(on = self.solo.is_on(), members = self.solo.tracks().len(), "solo");
        self.events.emit(MixerEvent::SoloChanged(self.solo.clone()));
    }

    /// Replace the solo set, applying the mute changes of leaving and then
    /// entering solo as needed.
    pub fn set_solo(&mut self, solo: SoloMode) {
        if self.solo.is_on() {
            self.release_solo();
        }
        self.solo = solo;
        if self.solo.is_on() {
            self.engage_solo();
        }
        self.events.emit(MixerEvent::SoloChanged(self.solo.clone()));
    }

    /// Add a solo member. While solo is on its player is unmuted.
    pub fn solo_insert(&mut self, track: Track) -> Result<bool> {
        self.player(&track)?;
        if !self.solo.insert(track) {
            return Ok(false);
        }
        if self.solo.is_on() && self.mix.contains(&track) {
            let player = self.player_mut(&track)?;
            player.remember_solo_mute();
            player.set_muted(false);
            self.events.emit(MixerEvent::ControlsChanged(track));
        }
        self.events.emit(MixerEvent::SoloChanged(self.solo.clone()));
        Ok(true)
    }

    /// Drop a solo member. While solo is on its player is muted, unless
    /// another member plays through it.
    pub fn solo_remove(&mut self, track: &Track) -> Result<bool> {
        self.player(track)?;
        if !self.solo.remove(track) {
            return Ok(false);
        }
        let key = track.asset_key();
        if self.solo.is_on() && self.mix.contains(track) && !self.solo_covers(key) {
            let player = self.player_mut(track)?;
            player.remember_solo_mute();
            player.set_muted(true);
            self.events.emit(MixerEvent::ControlsChanged(*track));
        }
        self.events.emit(MixerEvent::SoloChanged(self.solo.clone()));
        Ok(true)
    }

    fn engage_solo(&mut self) {
        for key in self.active_keys() {
            let covered = self.solo_covers(key);
            if let Some(player) = self.bank.get_mut(key) {
                player.remember_solo_mute();
                if !covered {
                    player.set_muted(true);
                }
            }
        }
    }

    fn release_solo(&mut self) {
        for key in self.active_keys() {
            if let Some(player) = self.bank.get_mut(key) {
                player.restore_solo_mute();
            }
        }
    }

    // --- per-track controls ---

    pub fn is_muted(&self, track: &Track) -> Result<bool> {
        Ok(self.player(track)?.is_muted())
    }

    pub fn set_muted(&mut self, track: &Track, muted: bool) -> Result<()> {
        self.player_mut(track)?.set_muted(muted);
        self.events.emit(MixerEvent::ControlsChanged(*track));
        Ok(())
    }

    /// Returns the new mute flag.
    pub fn toggle_mute(&mut self, track: &Track) -> Result<bool> {
        let muted = !self.is_muted(track)?;
        self.set_muted(track, muted)?;
        Ok(muted)
    }

    pub fn volume(&self, track: &Track) -> Result<f32> {
        Ok(self.player(track)?.volume())
    }

    /// Set the output level, `0..=1`.
    pub fn set_volume(&mut self, track: &Track, volume: f32) -> Result<()> {
        self.player_mut(track)?.set_volume(volume);
        self.events.emit(MixerEvent::ControlsChanged(*track));
        Ok(())
    }

    /// Pan in display units, `-pan_scale..=pan_scale`.
    pub fn pan(&self, track: &Track) -> Result<f32> {
        Ok(self.player(track)?.pan())
    }

    pub fn set_pan(&mut self, track: &Track, pan: f32) -> Result<()> {
        self.player(track)?.set_pan(pan);
        self.events.emit(MixerEvent::ControlsChanged(*track));
        Ok(())
    }

    pub fn controls(&self, track: &Track) -> Result<PlayerControls> {
        Ok(self.player(track)?.controls())
    }

    // --- repeat ---

    /// Takes effect at the next loop boundary.
    pub fn set_repeat_mode(&mut self, repeat: RepeatMode) {
        self.repeat = repeat;
        self.events.emit(MixerEvent::RepeatChanged(repeat));
    }

    /// Step none, forever, once and back to none.
    pub fn toggle_repeat(&mut self) -> RepeatMode {
        let mut repeat = self.repeat;
        repeat.toggle();
        self.set_repeat_mode(repeat);
        repeat
    }
}
