//! Simulation time model.
//!
//! # Design
//!
//! Time is whole seconds since midnight of the simulated day, held in
//! `SimTime`.  The driver advances a `SimClock` by a fixed step from the
//! first request's arrival up to, but not including, the end of the day:
//!
//!   t = start, start + step, start + 2·step, … while t < end
//!
//! Integer seconds keep all availability arithmetic exact.

use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// Seconds since midnight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u32);

impl SimTime {
    pub const MIDNIGHT: SimTime = SimTime(0);

    /// One simulated day, the default exclusive end of a run.
    pub const SECS_PER_DAY: u32 = 86_400;

    #[inline]
    pub fn secs(self) -> u32 {
        self.0
    }

    /// Split into (hour, minute, second).  Hours may exceed 23 for a flight
    /// that lands after midnight.
    pub fn hms(self) -> (u32, u32, u32) {
        (self.0 / 3_600, (self.0 % 3_600) / 60, self.0 % 60)
    }
}

/// Saturates at `u32::MAX` rather than wrapping.
impl std::ops::Add<u32> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u32) -> SimTime {
        SimTime(self.0.saturating_add(rhs))
    }
}

impl std::ops::Sub for SimTime {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: SimTime) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Fixed-step clock over `[start, end)`.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// The current tick time.
    pub current: SimTime,
    /// Seconds per tick.
    pub step_secs: u32,
    /// Exclusive upper bound.
    pub end: SimTime,
}

impl SimClock {
    pub fn new(start: SimTime, step_secs: u32, end: SimTime) -> Self {
        Self { current: start, step_secs, end }
    }

    /// Advance the clock by one tick.  A step that would overflow lands on
    /// `end`.
    #[inline]
    pub fn advance(&mut self) {
        self.current = match self.current.0.checked_add(self.step_secs) {
            Some(next) => SimTime(next),
            None => self.end.max(self.current),
        };
    }

    /// `true` once the clock has reached `end`.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current >= self.end
    }

    /// Number of ticks left before `end`, counting the current one.
    pub fn remaining_ticks(&self) -> u32 {
        if self.is_finished() {
            return 0;
        }
        (self.end - self.current).div_ceil(self.step_secs)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (step {} s, ends {})", self.current, self.step_secs, self.end)
    }
}
