//! Top-level simulation configuration.

use crate::{Floor, LiftError, LiftResult};

/// Everything needed to build one simulation instance.
///
/// The server binary loads a base config from a JSON file (behind the `serde`
/// feature) and overrides the three counts from each `init` request.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of elevators in the fleet.  Must be at least 1.
    pub num_elevators: u32,

    /// Number of floors, numbered `0..num_floors`.  Must be at least 2.
    pub num_floors: u32,

    /// Passengers generated at init.  Zero is allowed (an empty building).
    pub num_passengers: u32,

    /// Per-elevator passenger capacity.  Must be at least 1.
    pub max_capacity: u32,

    /// The lobby floor targeted by rush-hour generation and the sweep policy.
    pub lobby_floor: Floor,

    /// Morning rush: passengers originate at the lobby and idle elevators
    /// are steered back there while lobby demand remains.
    pub rush_hour: bool,

    /// How many elevators (lowest ids first) the rush-hour sweep may steer.
    pub rush_hour_elevators: u32,

    /// A passenger waiting strictly longer than this gets dispatch priority.
    pub priority_wait_ms: u64,

    /// Simulated milliseconds per tick.
    pub tick_duration_ms: u64,

    /// Master RNG seed.  The same seed always produces the same roster.
    pub seed: u64,

    /// Hard stop for headless runs that never reach completion.
    pub max_ticks: u64,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_elevators:         3,
            num_floors:            10,
            num_passengers:        20,
            max_capacity:          5,
            lobby_floor:           0,
            rush_hour:             true,
            rush_hour_elevators:   1,
            priority_wait_ms:      30_000,
            tick_duration_ms:      1_000,
            seed:                  42,
            max_ticks:             100_000,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// Largest fleet a config may ask for.
    pub const MAX_ELEVATORS: u32 = 1_000;
    /// Tallest building a config may ask for.
    pub const MAX_FLOORS: u32 = 10_000;
    /// Largest roster a config may ask for.
    pub const MAX_PASSENGERS: u32 = 1_000_000;

    /// Copy of `self` with the three init-request counts replaced.
    pub fn with_counts(&self, elevators: u32, floors: u32, passengers: u32) -> Self {
        Self {
            num_elevators:  elevators,
            num_floors:     floors,
            num_passengers: passengers,
            ..self.clone()
        }
    }

    /// Reject configurations that would produce a degenerate or oversized
    /// building.
    pub fn validate(&self) -> LiftResult<()> {
        if self.num_elevators == 0 {
            return Err(LiftError::Config("num_elevators must be at least 1".into()));
        }
        if self.num_floors < 2 {
            return Err(LiftError::Config(format!(
                "num_floors must be at least 2, got {}",
                self.num_floors
            )));
        }
        check_max("num_elevators", self.num_elevators, Self::MAX_ELEVATORS)?;
        check_max("num_floors", self.num_floors, Self::MAX_FLOORS)?;
        check_max("num_passengers", self.num_passengers, Self::MAX_PASSENGERS)?;
        if self.max_capacity == 0 {
            return Err(LiftError::Config("max_capacity must be at least 1".into()));
        }
        if self.lobby_floor >= self.num_floors {
            return Err(LiftError::FloorOutOfRange {
                floor:  self.lobby_floor,
                floors: self.num_floors,
            });
        }
        if self.tick_duration_ms == 0 {
            return Err(LiftError::Config("tick_duration_ms must be positive".into()));
        }
        Ok(())
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> crate::SimClock {
        crate::SimClock::new(self.tick_duration_ms)
    }
}

fn check_max(field: &str, value: u32, max: u32) -> LiftResult<()> {
    if value > max {
        return Err(LiftError::Config(format!("{field} must be at most {max}, got {value}")));
    }
    Ok(())
}
