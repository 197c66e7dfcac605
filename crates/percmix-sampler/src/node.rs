//! Loop voice rendered by the mix bus.

use parking_lot::Mutex;
use percmix_core::{AtomicFlag, AtomicFloat, GraphNode, SmoothedValue, Wave};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// What the voice plays once started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Nothing armed; a started voice renders silence.
    Idle,
    /// The whole asset, looping from frame 0.
    Looping,
    /// The asset from `start` to its end, once.
    Segment { start: usize },
}

#[derive(Debug)]
struct Playhead {
    schedule: Schedule,
    cursor: usize,
    gain: SmoothedValue,
}

impl Playhead {
    /// Asset frame to play next, or `None` when nothing is armed.
    #[inline]
    fn advance(&mut self, len: usize) -> Option<usize> {
        match self.schedule {
            Schedule::Idle => None,
            Schedule::Looping => {
                let index = self.cursor;
                self.cursor = (self.cursor + 1) % len;
                Some(index)
            }
            Schedule::Segment { .. } if self.cursor < len => {
                let index = self.cursor;
                self.cursor += 1;
                Some(index)
            }
            Schedule::Segment { .. } => {
                self.schedule = Schedule::Idle;
                None
            }
        }
    }
}

struct Shared {
    key: String,
    asset: Option<Arc<Wave>>,
    level: AtomicFloat,
    pan: AtomicFloat,
    started: AtomicFlag,
    rendered: AtomicU64,
    playhead: Mutex<Playhead>,
}

/// A voice playing one loop asset.
///
/// Cloning yields another handle to the same voice: the control side keeps
/// one, the mix bus another. The render-time counter advances by one per
/// rendered frame while the voice is started, whether or not anything is
/// scheduled, so a silent voice can serve as a clock. A buffer skipped
/// because the control side holds the schedule is not counted, which keeps
/// the counter in step with the cursors of the other voices.
#[derive(Clone)]
pub struct PlayerNode {
    shared: Arc<Shared>,
}

impl PlayerNode {
    pub fn new(key: impl Into<String>, asset: Option<Arc<Wave>>, sample_rate: f64) -> Self {
        Self {
            shared: Arc::new(Shared {
                key: key.into(),
                asset,
                level: AtomicFloat::new(1.0),
                pan: AtomicFloat::new(0.0),
                started: AtomicFlag::new(false),
                rendered: AtomicU64::new(0),
                playhead: Mutex::new(Playhead {
                    schedule: Schedule::Idle,
                    cursor: 0,
                    gain: SmoothedValue::new(
                        1.0,
                        SmoothedValue::DECLICK_SECS,
                        sample_rate as f32,
                    ),
                }),
            }),
        }
    }

    pub fn key(&self) -> &str {
        &self.shared.key
    }

    pub fn asset(&self) -> Option<&Arc<Wave>> {
        self.shared.asset.as_ref()
    }

    /// Asset length in frames; 0 without an asset.
    pub fn len(&self) -> usize {
        self.shared.asset.as_ref().map_or(0, |wave| wave.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Arm the voice, replacing any pending schedule. `None` loops the whole
    /// asset; `Some(frame)` plays `[frame, len)` once. Returns `false` when
    /// nothing could be armed (no asset, or `frame` past the end).
    pub fn schedule(&self, start: Option<usize>) -> bool {
        let len = self.len();
        let mut playhead = self.shared.playhead.lock();
        let (schedule, cursor) = match start {
            _ if len == 0 => (Schedule::Idle, 0),
            None => (Schedule::Looping, 0),
            Some(frame) if frame < len => (Schedule::Segment { start: frame }, frame),
            Some(_) => (Schedule::Idle, 0),
        };
        playhead.schedule = schedule;
        playhead.cursor = cursor;
        schedule != Schedule::Idle
    }

    pub fn play(&self) {
        self.shared.started.set(true);
    }

    /// Halt output, drop the schedule and reset the render-time counter.
    pub fn stop(&self) {
        let mut playhead = self.shared.playhead.lock();
        self.shared.started.set(false);
        self.shared.rendered.store(0, Ordering::Release);
        playhead.schedule = Schedule::Idle;
        playhead.cursor = 0;
    }

    pub fn is_playing(&self) -> bool {
        self.shared.started.get()
    }

    /// Frames rendered since the voice was last started from a halt.
    pub fn render_frames(&self) -> u64 {
        self.shared.rendered.load(Ordering::Acquire)
    }

    pub fn scheduled(&self) -> Schedule {
        self.shared.playhead.lock().schedule
    }

    /// Next asset frame the voice will play.
    pub fn cursor(&self) -> usize {
        self.shared.playhead.lock().cursor
    }

    pub fn level(&self) -> f32 {
        self.shared.level.get()
    }

    /// Output level, clamped to `[0, 1]`. Ramped in the audio thread.
    pub fn set_level(&self, level: f32) -> f32 {
        self.shared.level.set_clamped(level, 0.0, 1.0)
    }

    pub fn pan(&self) -> f32 {
        self.shared.pan.get()
    }

    /// Stereo position, clamped to `[-1, 1]`.
    pub fn set_pan(&self, pan: f32) -> f32 {
        self.shared.pan.set_clamped(pan, -1.0, 1.0)
    }
}

impl std::fmt::Debug for PlayerNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerNode")
            .field("key", &self.shared.key)
            .field("len", &self.len())
            .field("playing", &self.is_playing())
            .finish()
    }
}

/// Balance pan: the centre leaves both sides at unity.
#[inline]
fn pan_gains(pan: f32) -> (f32, f32) {
    ((1.0 - pan).min(1.0), (1.0 + pan).min(1.0))
}

#[inline]
fn frame_at(wave: &Wave, index: usize) -> (f32, f32) {
    if wave.channels() >= 2 {
        (wave.at(0, index), wave.at(1, index))
    } else {
        let mono = wave.at(0, index);
        (mono, mono)
    }
}

impl GraphNode for PlayerNode {
    fn node_id(&self) -> u64 {
        Arc::as_ptr(&self.shared) as *const () as usize as u64
    }

    fn render_add(&self, output: &mut [f32]) {
        let frames = output.len() / 2;

        // Control side is mid-update: skip the buffer. The counter is only
        // touched under the lock so a concurrent stop cannot be undone.
        let Some(mut playhead) = self.shared.playhead.try_lock() else {
            return;
        };

        if !self.shared.started.get() {
            return;
        }
        self.shared
            .rendered
            .fetch_add(frames as u64, Ordering::AcqRel);

        let Some(wave) = self.shared.asset.as_deref() else {
            return;
        };
        let len = wave.len();
        if len == 0 {
            return;
        }

        playhead.gain.set_target(self.shared.level.get());
        let (left_gain, right_gain) = pan_gains(self.shared.pan.get());

        for frame in output.chunks_exact_mut(2) {
            let gain = playhead.gain.next_sample();
            let Some(index) = playhead.advance(len) else {
                continue;
            };
            let (left, right) = frame_at(wave, index);
            frame[0] += left * gain * left_gain;
            frame[1] += right * gain * right_gain;
        }
    }
}
