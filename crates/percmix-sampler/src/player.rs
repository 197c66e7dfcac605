//! Control-side wrapper around a loop voice.

use crate::node::{PlayerNode, Schedule};
use percmix_core::{FramePosition, PlaybackState, Wave};
use std::sync::Arc;

/// Mixing controls carried from one player to another, e.g. when a surprise
/// fill is replaced by a fresh draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerControls {
    pub muted: bool,
    pub volume: f32,
    /// Normalized, `-1..=1`.
    pub pan: f32,
    pub solo_snapshot: Option<bool>,
}

/// One loop player: a voice in the render graph plus the mute, volume, pan
/// and solo memory the mixer keeps for it.
///
/// Players start muted at a remembered volume of 1.0.
#[derive(Debug)]
pub struct PlayerResource {
    node: PlayerNode,
    remembered_volume: Option<f32>,
    solo_snapshot: Option<bool>,
    pan_scale: f32,
}

impl PlayerResource {
    /// Angular span of the pan control at full deflection.
    pub const DEFAULT_PAN_SCALE: f32 = 135.0;

    pub fn new(node: PlayerNode) -> Self {
        node.set_level(0.0);
        Self {
            node,
            remembered_volume: Some(1.0),
            solo_snapshot: None,
            pan_scale: Self::DEFAULT_PAN_SCALE,
        }
    }

    pub fn with_pan_scale(mut self, pan_scale: f32) -> Self {
        self.pan_scale = pan_scale;
        self
    }

    pub fn node(&self) -> &PlayerNode {
        &self.node
    }

    pub fn key(&self) -> &str {
        self.node.key()
    }

    pub fn asset(&self) -> Option<&Arc<Wave>> {
        self.node.asset()
    }

    /// Asset length in frames.
    pub fn len(&self) -> FramePosition {
        self.node.len() as FramePosition
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_empty()
    }

    /// `None` arms the whole asset looping; `Some(frame)` arms one pass from
    /// `frame` (negative frames start at 0). Replaces any pending schedule.
    /// Without an asset this does nothing.
    pub fn schedule(&self, at: Option<FramePosition>) {
        if self.node.asset().is_none() {
            return;
        }
        let start = at.map(|frame| frame.max(0) as usize);
        if !self.node.schedule(start) {
            tracing::debug!(key = self.key(), ?at, "schedule past end of asset, nothing armed");
        }
    }

    pub fn scheduled(&self) -> Schedule {
        self.node.scheduled()
    }

    /// Bring the voice in line with the mix's transport state.
    pub fn apply(&self, state: &PlaybackState<FramePosition>) {
        match *state {
            PlaybackState::Playing(_) => self.node.play(),
            PlaybackState::Stopped => {
                self.node.stop();
                self.schedule(None);
            }
            PlaybackState::Paused(position) => {
                self.node.stop();
                self.schedule(Some(position));
            }
        }
    }

    /// Silence immediately and drop whatever was armed.
    pub fn halt(&self) {
        self.node.stop();
    }

    pub fn is_playing(&self) -> bool {
        self.node.is_playing()
    }

    pub fn render_frames(&self) -> u64 {
        self.node.render_frames()
    }

    pub fn is_muted(&self) -> bool {
        self.node.level() == 0.0
    }

    pub fn set_muted(&mut self, muted: bool) {
        if muted {
            let level = self.node.level();
            if level > 0.0 {
                self.remembered_volume = Some(level);
            }
            self.node.set_level(0.0);
        } else {
            self.node.set_level(self.remembered_volume.unwrap_or(1.0));
        }
    }

    /// Volume shown on the slider: the remembered level, which survives
    /// muting.
    pub fn volume(&self) -> f32 {
        self.remembered_volume.unwrap_or_else(|| self.node.level())
    }

    /// Set the output level directly. Non-zero values are remembered for
    /// unmuting.
    pub fn set_volume(&mut self, volume: f32) {
        let applied = self.node.set_level(volume);
        if applied != 0.0 {
            self.remembered_volume = Some(applied);
        }
    }

    pub fn pan_scale(&self) -> f32 {
        self.pan_scale
    }

    /// Pan in display units, `-pan_scale..=pan_scale`.
    pub fn pan(&self) -> f32 {
        self.node.pan() * self.pan_scale
    }

    pub fn set_pan(&self, scaled: f32) {
        let normalized = if self.pan_scale != 0.0 {
            scaled / self.pan_scale
        } else {
            0.0
        };
        self.node.set_pan(normalized);
    }

    pub fn solo_snapshot(&self) -> Option<bool> {
        self.solo_snapshot
    }

    /// Record the current mute flag ahead of a solo change, unless one is
    /// already recorded.
    pub fn remember_solo_mute(&mut self) {
        if self.solo_snapshot.is_none() {
            self.solo_snapshot = Some(self.is_muted());
        }
    }

    /// Put back the mute flag recorded by [`remember_solo_mute`] and clear
    /// the record. Does nothing when there is none.
    ///
    /// [`remember_solo_mute`]: Self::remember_solo_mute
    pub fn restore_solo_mute(&mut self) {
        if let Some(muted) = self.solo_snapshot.take() {
            self.set_muted(muted);
        }
    }

    pub fn clear_solo_snapshot(&mut self) {
        self.solo_snapshot = None;
    }

    pub fn controls(&self) -> PlayerControls {
        PlayerControls {
            muted: self.is_muted(),
            volume: self.volume(),
            pan: self.node.pan(),
            solo_snapshot: self.solo_snapshot,
        }
    }

    pub fn set_controls(&mut self, controls: PlayerControls) {
        self.set_volume(controls.volume);
        self.node.set_pan(controls.pan);
        self.set_muted(controls.muted);
        self.solo_snapshot = controls.solo_snapshot;
    }
}
