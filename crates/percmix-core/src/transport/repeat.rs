//! Loop repetition descriptor.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How many times the mix loops before stopping.
///
/// `Times { total, progress }` plays the loop `total` extra times; `progress`
/// counts the restarts already taken in the current cycle and never exceeds
/// `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepeatMode {
    Times { total: u32, progress: u32 },
    Forever,
}

/// Outcome of reaching the end of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatAdvance {
    /// Start the loop again from the top.
    Restart,
    /// Stay stopped; the descriptor has been rewound for the next cycle.
    Finish,
}

impl RepeatMode {
    pub const NONE: Self = Self::times(0);
    pub const ONCE: Self = Self::times(1);

    /// Order of [`toggle`](Self::toggle).
    pub const CYCLE: [Self; 3] = [Self::NONE, Self::Forever, Self::ONCE];

    pub const fn times(total: u32) -> Self {
        Self::Times { total, progress: 0 }
    }

    /// Convert from the player convention where `-1` loops forever. Other
    /// negative counts mean no repetition.
    pub fn from_loop_count(count: i32) -> Self {
        match count {
            -1 => Self::Forever,
            n if n <= 0 => Self::NONE,
            n => Self::times(n as u32),
        }
    }

    /// Player convention: `-1` for forever, otherwise the total count.
    pub fn loop_count(&self) -> i32 {
        match *self {
            Self::Forever => -1,
            Self::Times { total, .. } => total.min(i32::MAX as u32) as i32,
        }
    }

    pub fn is_repeating(&self) -> bool {
        *self != Self::NONE
    }

    /// Restarts left in the current cycle; `None` when looping forever.
    pub fn remaining(&self) -> Option<u32> {
        match *self {
            Self::Forever => None,
            Self::Times { total, progress } => Some(total.saturating_sub(progress)),
        }
    }

    /// Same total, progress cleared.
    pub fn rewound(&self) -> Self {
        match *self {
            Self::Forever => Self::Forever,
            Self::Times { total, .. } => Self::times(total),
        }
    }

    /// Step to the next entry of [`CYCLE`](Self::CYCLE). The current entry is
    /// found by total count, ignoring progress; counts outside the cycle start
    /// it over from the first entry.
    pub fn toggle(&mut self) {
        let current = self.rewound();
        let next = Self::CYCLE
            .iter()
            .position(|mode| *mode == current)
            .map_or(0, |index| (index + 1) % Self::CYCLE.len());
        *self = Self::CYCLE[next];
    }

    /// Evaluate the end of the loop and update progress.
    pub fn advance(&mut self) -> RepeatAdvance {
        match *self {
            Self::Forever => RepeatAdvance::Restart,
            Self::Times { total, progress } if progress >= total => {
                *self = Self::times(total);
                RepeatAdvance::Finish
            }
            Self::Times { total, progress } => {
                *self = Self::Times {
                    total,
                    progress: progress + 1,
                };
                RepeatAdvance::Restart
            }
        }
    }

    fn rank(&self) -> (u8, u32, u32) {
        match *self {
            Self::Times { total, progress } => (0, total, progress),
            Self::Forever => (1, 0, 0),
        }
    }
}

impl Default for RepeatMode {
    fn default() -> Self {
        Self::NONE
    }
}

impl Ord for RepeatMode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for RepeatMode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
