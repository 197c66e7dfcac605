//! Fixed-rate frame clock driving the playhead poll.

use crate::AtomicFlag;
use crossbeam_channel::Receiver;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Pausable, cancellable tick source standing in for display refresh.
///
/// Clones share the paused and cancelled flags, so the engine can pause the
/// link it hands out to the thread that runs [`run`](Self::run).
#[derive(Debug, Clone)]
pub struct DisplayLink {
    interval: Duration,
    paused: Arc<AtomicFlag>,
    cancelled: Arc<AtomicFlag>,
}

impl DisplayLink {
    /// New link ticking at `rate_hz`. Starts paused.
    pub fn new(rate_hz: f64) -> Self {
        let rate_hz = if rate_hz.is_finite() && rate_hz > 0.0 {
            rate_hz
        } else {
            60.0
        };
        Self {
            interval: Duration::from_secs_f64(1.0 / rate_hz),
            paused: Arc::new(AtomicFlag::new(true)),
            cancelled: Arc::new(AtomicFlag::new(false)),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_paused(&self) -> bool {
        self.paused.get()
    }

    pub fn set_paused(&self, paused: bool) {
        self.paused.set(paused);
    }

    /// Stop every [`run`](Self::run) loop sharing this link. Irreversible.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Raw tick channel at the link's interval.
    pub fn ticks(&self) -> Receiver<Instant> {
        crossbeam_channel::tick(self.interval)
    }

    /// Block, calling `on_frame` once per unpaused tick, until cancelled.
    pub fn run<F: FnMut(Instant)>(&self, mut on_frame: F) {
        let ticks = self.ticks();
        while !self.is_cancelled() {
            let Ok(instant) = ticks.recv() else {
                break;
            };
            if self.is_cancelled() {
                break;
            }
            if !self.is_paused() {
                on_frame(instant);
            }
        }
    }
}

impl Default for DisplayLink {
    fn default() -> Self {
        Self::new(60.0)
    }
}
