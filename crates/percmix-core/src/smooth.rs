//! Linear gain ramps for click-free level changes.
//!
//! Muting a loop mid-phrase must not produce a step discontinuity, so every
//! voice passes its output level through a [`SmoothedValue`] that moves
//! towards the requested level over a few milliseconds.
//!
//! # Example
//!
//! ```
//! use percmix_core::SmoothedValue;
//!
//! let mut gain = SmoothedValue::new(1.0, SmoothedValue::DECLICK_SECS, 44100.0);
//! gain.set_target(0.0);
//!
//! # let mut buffer = [1.0f32; 512];
//! for sample in buffer.iter_mut() {
//!     *sample *= gain.next_sample();
//! }
//! assert_eq!(gain.current(), 0.0);
//! ```

/// Value that ramps linearly to its target, one step per frame.
#[derive(Debug, Clone)]
pub struct SmoothedValue {
    current: f32,
    target: f32,
    step: f32,
    frames_remaining: u32,
    ramp_frames: u32,
}

impl SmoothedValue {
    /// Ramp length used by voices for mute, volume and solo changes.
    pub const DECLICK_SECS: f32 = 0.005;

    pub fn new(initial: f32, ramp_secs: f32, sample_rate: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            step: 0.0,
            frames_remaining: 0,
            ramp_frames: ramp_frames(ramp_secs, sample_rate),
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() < f32::EPSILON {
            return;
        }

        self.target = target;
        self.frames_remaining = self.ramp_frames;
        self.step = (self.target - self.current) / self.ramp_frames as f32;
    }

    /// Advance one frame and return the gain for it.
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        if self.frames_remaining > 0 {
            self.current += self.step;
            self.frames_remaining -= 1;

            // Snap so float drift never leaves a residual level after muting
            if self.frames_remaining == 0 {
                self.current = self.target;
            }
        }

        self.current
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn is_smoothing(&self) -> bool {
        self.frames_remaining > 0
    }
}

fn ramp_frames(ramp_secs: f32, sample_rate: f32) -> u32 {
    (ramp_secs * sample_rate).max(1.0) as u32
}
