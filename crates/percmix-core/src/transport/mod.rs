//! Transport state shared by every loop in a mix.

mod repeat;
mod state;

pub use repeat::{RepeatAdvance, RepeatMode};
pub use state::PlaybackState;

/// Frame offset into a loop asset. Signed so seek arithmetic can go below
/// zero before clamping.
pub type FramePosition = i64;

/// Clamp `position` to the playable frames `[0, length - 1]` of an asset.
///
/// An empty asset has no playable frame; the result is 0.
#[inline]
pub fn clamp_playable(position: FramePosition, length: FramePosition) -> FramePosition {
    position.clamp(0, (length - 1).max(0))
}

/// Convert seconds to a frame position, truncating towards zero. Non-finite
/// input maps to 0.
#[inline]
pub fn seconds_to_frames(seconds: f64, sample_rate: f64) -> FramePosition {
    let frames = seconds * sample_rate;
    if frames.is_finite() {
        frames as FramePosition
    } else {
        0
    }
}

#[inline]
pub fn frames_to_seconds(frames: FramePosition, sample_rate: f64) -> f64 {
    if sample_rate > 0.0 {
        frames as f64 / sample_rate
    } else {
        0.0
    }
}
