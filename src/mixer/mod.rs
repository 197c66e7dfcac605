//! The synchronization engine.
//!
//! One silent "click" player is the master clock. Every poll tick reads how
//! many frames it has rendered, adds the seek offset, and publishes the
//! result as the playhead shared by all tracks. Transport changes are pushed
//! to the click and to every active track's player in one pass.

mod controls;
mod tracks;

use crate::event::EventBus;
use crate::{Mix, MixerBuilder, MixerConfig, MixerEvent, SoloMode};
use crossbeam_channel::Receiver;
use percmix_core::transport::{clamp_playable, frames_to_seconds, seconds_to_frames};
use percmix_core::{
    DisplayLink, FramePosition, PlaybackState, RenderGraph, RepeatAdvance, RepeatMode,
};
use percmix_sampler::{PlayerBank, PlayerResource};
use rand::rngs::StdRng;
use std::collections::BTreeSet;
use tracing::debug;

/// Plays a [`Mix`] with every track locked to one playhead.
///
/// The mixer is driven from a single thread: call [`tick`](Self::tick) once
/// per frame of the [`DisplayLink`] returned by
/// [`display_link`](Self::display_link). The render graph runs on its own
/// audio thread (or on demand, for offline output).
///
/// # Example
///
/// ```ignore
/// let mut mixer = Mixer::builder().asset_dir("loops").build()?;
/// let link = mixer.display_link();
/// mixer.play();
/// link.run(|_| mixer.tick());
/// ```
pub struct Mixer {
    config: MixerConfig,
    graph: RenderGraph,
    click: PlayerResource,
    bank: PlayerBank,
    mix: Mix,
    state: PlaybackState<FramePosition>,
    playhead: FramePosition,
    seek: FramePosition,
    repeat: RepeatMode,
    solo: SoloMode,
    scrubbing: bool,
    link: DisplayLink,
    rng: StdRng,
    events: EventBus,
}

impl Mixer {
    pub fn builder() -> MixerBuilder {
        MixerBuilder::default()
    }

    pub(crate) fn assemble(
        config: MixerConfig,
        graph: RenderGraph,
        click: PlayerResource,
        bank: PlayerBank,
        mix: Mix,
        link: DisplayLink,
        rng: StdRng,
    ) -> Self {
        click.schedule(None);
        let mut bank = bank;
        for track in mix.iter() {
            if let Some(player) = bank.get_mut(track.asset_key()) {
                player.schedule(None);
                player.set_muted(false);
            }
        }

        Self {
            config,
            graph,
            click,
            bank,
            mix,
            state: PlaybackState::Stopped,
            playhead: 0,
            seek: 0,
            repeat: RepeatMode::NONE,
            solo: SoloMode::default(),
            scrubbing: false,
            link,
            rng,
            events: EventBus::default(),
        }
    }

    // --- queries ---

    pub fn config(&self) -> &MixerConfig {
        &self.config
    }

    pub fn graph(&self) -> &RenderGraph {
        &self.graph
    }

    pub fn sample_rate(&self) -> f64 {
        self.graph.sample_rate()
    }

    /// A handle to the poll clock. It runs only while the mix is playing.
    pub fn display_link(&self) -> DisplayLink {
        self.link.clone()
    }

    /// Transport state, carrying the published playhead.
    pub fn playback_state(&self) -> PlaybackState<FramePosition> {
        self.state.with_position(self.playhead)
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn playhead(&self) -> FramePosition {
        self.playhead
    }

    pub fn playhead_seconds(&self) -> f64 {
        frames_to_seconds(self.playhead, self.sample_rate())
    }

    /// Frame offset added to the click's render count.
    pub fn seek_offset(&self) -> FramePosition {
        self.seek
    }

    /// Loop length in frames, taken from the click.
    pub fn duration_frames(&self) -> FramePosition {
        self.click.len()
    }

    pub fn duration_seconds(&self) -> f64 {
        frames_to_seconds(self.duration_frames(), self.sample_rate())
    }

    pub fn mix(&self) -> &Mix {
        &self.mix
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    pub fn solo(&self) -> &SoloMode {
        &self.solo
    }

    pub fn is_scrubbing(&self) -> bool {
        self.scrubbing
    }

    /// The master clock player.
    pub fn click(&self) -> &PlayerResource {
        &self.click
    }

    pub fn players(&self) -> &PlayerBank {
        &self.bank
    }

    /// Receive every change from now on. Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<MixerEvent> {
        self.events.subscribe()
    }

    // --- transport ---

    pub fn play(&mut self) {
        if self.state.is_playing() {
            return;
        }
        self.set_playback_state(PlaybackState::Playing(self.playhead));
    }

    pub fn pause(&mut self) {
        if !self.state.is_playing() {
            return;
        }
        let position = clamp_playable(self.playhead, self.duration_frames());
        self.set_playback_state(PlaybackState::Paused(position));
    }

    /// Back to frame 0. Ends a scrub session without resuming.
    pub fn stop(&mut self) {
        if self.scrubbing {
            self.scrubbing = false;
            self.events.emit(MixerEvent::ScrubbingChanged(false));
        }
        self.set_playback_state(PlaybackState::Stopped);
    }

    /// Playing and paused swap at the same position; stopped starts playing.
    pub fn toggle(&mut self) {
        if self.state.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Pause only when playing, e.g. before another preview takes the output.
    pub fn pause_if_playing(&mut self) {
        if self.state.is_playing() {
            self.pause();
        }
    }

    /// Commit `state` and push it to the click and every active player.
    fn set_playback_state(&mut self, state: PlaybackState<FramePosition>) {
        match state {
            PlaybackState::Playing(_) => self.link.set_paused(false),
            PlaybackState::Stopped => {
                self.playhead = 0;
                self.seek = 0;
                self.link.set_paused(true);
            }
            PlaybackState::Paused(position) => {
                self.playhead = position;
                self.seek = position;
                self.link.set_paused(true);
            }
        }
        self.state = state;
        debug!(state = ?state, seek = self.seek, "transport");

        self.click.apply(&state);
        for key in self.active_keys() {
            if let Some(player) = self.bank.get(key) {
                player.apply(&state);
            }
        }
        self.events
            .emit(MixerEvent::PlaybackChanged(self.playback_state()));
    }

    // --- scrubbing ---

    /// Suspend the poll while the user drags the playhead.
    pub fn begin_scrub(&mut self) {
        if self.scrubbing {
            return;
        }
        self.scrubbing = true;
        self.link.set_paused(true);
        self.events.emit(MixerEvent::ScrubbingChanged(true));
    }

    /// Move the playhead to `seconds`, clamped into the loop. Outside a
    /// scrub session the players are re-armed right away.
    pub fn scrub(&mut self, seconds: f64) {
        let frames = seconds_to_frames(seconds, self.sample_rate());
        let position = clamp_playable(frames, self.duration_frames());
        self.playhead = position;
        self.seek = position;
        self.events.emit(MixerEvent::PositionChanged(position));

        if !self.scrubbing {
            self.rearm();
        }
    }

    /// Release the playhead: re-arm every player at it and resume if the mix
    /// was playing.
    pub fn end_scrub(&mut self) {
        if !self.scrubbing {
            return;
        }
        self.scrubbing = false;
        self.rearm();
        self.events.emit(MixerEvent::ScrubbingChanged(false));
    }

    fn rearm(&mut self) {
        let resume = self.state.is_playing();
        let position = self.playhead;
        self.set_playback_state(PlaybackState::Paused(position));
        if resume {
            self.set_playback_state(PlaybackState::Playing(position));
        }
    }

    // --- poll ---

    /// One poll of the master clock. Does nothing unless playing, the link
    /// is running and no scrub is in progress.
    pub fn tick(&mut self) {
        if self.link.is_paused() || self.scrubbing || !self.state.is_playing() {
            return;
        }
        let length = self.duration_frames();
        let position = self.clock_position().clamp(0, length);
        if position < length {
            self.playhead = position;
            self.events.emit(MixerEvent::PositionChanged(position));
        } else {
            self.complete_loop();
        }
    }

    /// Click render time plus seek offset, unclamped.
    fn clock_position(&self) -> FramePosition {
        let rendered =
            FramePosition::try_from(self.click.render_frames()).unwrap_or(FramePosition::MAX);
        rendered.saturating_add(self.seek)
    }

    fn complete_loop(&mut self) {
        let repeat = self.repeat;
        self.set_playback_state(PlaybackState::Stopped);
        self.events.emit(MixerEvent::LoopCompleted { repeat });
        self.reroll_surprise();

        let advance = self.repeat.advance();
        debug!(?repeat, ?advance, "loop completed");
        if self.repeat != repeat {
            self.events.emit(MixerEvent::RepeatChanged(self.repeat));
        }
        if advance == RepeatAdvance::Restart {
            self.play();
        }
    }

    /// Asset keys of the active tracks, each once.
    fn active_keys(&self) -> BTreeSet<&'static str> {
        self.mix.iter().map(|track| track.asset_key()).collect()
    }
}

impl Drop for Mixer {
    fn drop(&mut self) {
        self.link.cancel();
    }
}

impl std::fmt::Debug for Mixer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mixer")
            .field("state", &self.playback_state())
            .field("seek", &self.seek)
            .field("repeat", &self.repeat)
            .field("solo", &self.solo)
            .field("tracks", &self.mix.len())
            .field("scrubbing", &self.scrubbing)
            .finish()
    }
}
