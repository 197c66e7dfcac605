//! Playback session state.

use serde::{Deserialize, Serialize};

/// Transport state of the whole mix.
///
/// `Stopped` compares equal to `Paused` at the default position, but stays a
/// distinct case so callers can tell "never started / reset" from "paused at
/// the top".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum PlaybackState<T> {
    #[default]
    Stopped,
    Playing(T),
    Paused(T),
}

impl<T: Copy + Default + PartialEq> PlaybackState<T> {
    #[inline]
    pub fn position(&self) -> T {
        match *self {
            Self::Stopped => T::default(),
            Self::Playing(position) | Self::Paused(position) => position,
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing(_))
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        matches!(self, Self::Stopped)
    }

    /// Same case, new position. `Stopped` stays `Stopped`.
    pub fn with_position(self, position: T) -> Self {
        match self {
            Self::Stopped => Self::Stopped,
            Self::Playing(_) => Self::Playing(position),
            Self::Paused(_) => Self::Paused(position),
        }
    }

    /// Playing and paused swap at the same position; stopped starts playing
    /// from the top.
    pub fn toggled(self) -> Self {
        match self {
            Self::Stopped => Self::Playing(T::default()),
            Self::Playing(position) => Self::Paused(position),
            Self::Paused(position) => Self::Playing(position),
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn reset(&mut self) {
        *self = Self::Stopped;
    }
}

impl<T: Copy + Default + PartialEq> PartialEq for PlaybackState<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_playing() == other.is_playing() && self.position() == other.position()
    }
}

impl<T: Copy + Default + Eq> Eq for PlaybackState<T> {}
