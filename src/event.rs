//! Change notification for presentation layers.

use crate::SoloMode;
use crossbeam_channel::{Receiver, Sender};
use percmix_catalog::Track;
use percmix_core::{FramePosition, PlaybackState, RepeatMode};

/// Something observable about the mixer changed.
#[derive(Debug, Clone, PartialEq)]
pub enum MixerEvent {
    PlaybackChanged(PlaybackState<FramePosition>),
    /// Published playhead moved (poll tick or scrub).
    PositionChanged(FramePosition),
    ScrubbingChanged(bool),
    /// The loop reached its end. Carries the repeat descriptor as it stood
    /// at the boundary, before progress was updated.
    LoopCompleted { repeat: RepeatMode },
    SurpriseRerolled { from: Track, to: Track },
    RepeatChanged(RepeatMode),
    SoloChanged(SoloMode),
    TrackInserted(Track),
    TrackRemoved(Track),
    /// Mute, volume or pan of a track changed.
    ControlsChanged(Track),
}

/// Fan-out to every live subscriber. Dropped receivers are pruned on the
/// next emit.
#[derive(Debug, Default)]
pub(crate) struct EventBus {
    subscribers: Vec<Sender<MixerEvent>>,
}

impl EventBus {
    pub(crate) fn subscribe(&mut self) -> Receiver<MixerEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub(crate) fn emit(&mut self, event: MixerEvent) {
        if self.subscribers.is_empty() {
            return;
        }
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
