//! Simulation time model.
//!
//! # Design
//!
//! Time is an integer nanosecond count since simulation start.  Using an
//! integer as the canonical unit means event-queue ordering is exact (no
//! float comparison, no accumulated drift from repeated `+= dt`) while still
//! resolving far below any physically meaningful mobility interval.
//!
//! Scenario parameters are naturally in seconds, so conversion helpers sit
//! at the API edges; everything inside the event queue stays integral.
//!
//! `SimTime` doubles as a duration: the difference of two instants is itself
//! a `SimTime`, mirroring how the arithmetic is actually used.

use std::fmt;

/// An absolute simulation instant (or a duration), in nanoseconds.
///
/// Stored as `u64`: at nanosecond resolution a u64 spans ~584 years of
/// simulated time, far beyond any conceivable scenario run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

const NANOS_PER_SEC: f64 = 1e9;

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// Build from a non-negative second count.  Negative or non-finite
    /// inputs saturate to zero — validate durations before converting.
    pub fn from_secs(secs: f64) -> SimTime {
        if !secs.is_finite() || secs <= 0.0 {
            return SimTime::ZERO;
        }
        SimTime((secs * NANOS_PER_SEC).round() as u64)
    }

    #[inline]
    pub fn from_millis(ms: u64) -> SimTime {
        SimTime(ms * 1_000_000)
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / NANOS_PER_SEC
    }

    /// Nanoseconds elapsed from `earlier` to `self`, as a duration.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> SimTime {
        SimTime(self.0 - earlier.0)
    }

    /// `self + dur`, or `None` on overflow.
    #[inline]
    pub fn checked_add(self, dur: SimTime) -> Option<SimTime> {
        self.0.checked_add(dur.0).map(SimTime)
    }

    #[inline]
    pub fn saturating_sub(self, other: SimTime) -> SimTime {
        SimTime(self.0.saturating_sub(other.0))
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn min(self, other: SimTime) -> SimTime {
        if self <= other { self } else { other }
    }
}

impl std::ops::Add for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: SimTime) -> SimTime {
        SimTime(self.0 + rhs.0)
    }
}

impl std::ops::Sub for SimTime {
    type Output = SimTime;
    #[inline]
    fn sub(self, rhs: SimTime) -> SimTime {
        SimTime(self.0 - rhs.0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.as_secs_f64())
    }
}
