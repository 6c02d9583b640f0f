//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  Each tick stands for a
//! fixed slice of simulated time held in `SimClock`:
//!
//!   sim_millis = tick * tick_duration_ms
//!
//! Passenger timestamps are taken from this clock, never from the wall
//! clock, so two runs from the same initial state produce byte-identical
//! snapshots.  The default tick is 1,000 ms (1 simulated second).

use std::fmt;

/// Simulated milliseconds since tick 0.
pub type SimMillis = u64;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and simulated milliseconds.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many simulated milliseconds one tick represents.  Default: 1000.
    pub tick_duration_ms: u64,
    /// The current tick: advanced by `SimClock::advance()` after each tick.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration_ms: u64) -> Self {
        Self {
            tick_duration_ms,
            current_tick: Tick::ZERO,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Simulated milliseconds at the current tick.
    #[inline]
    pub fn now_ms(&self) -> SimMillis {
        self.millis_at(self.current_tick)
    }

    /// Simulated milliseconds at an arbitrary tick.
    #[inline]
    pub fn millis_at(&self, tick: Tick) -> SimMillis {
        tick.0.saturating_mul(self.tick_duration_ms)
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(1_000)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.now_ms() / 1_000;
        write!(f, "{} ({}m{:02}s)", self.current_tick, secs / 60, secs % 60)
    }
}
