//! Plain data row types written by output backends.

use lift_roster::{Direction, Door};

/// One elevator's observable state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorSnapshotRow {
    pub elevator_id: u32,
    pub tick:        u64,
    pub floor:       u32,
    pub direction:   Direction,
    pub door:        Door,
    pub load:        u32,
    /// Number of queued target floors.
    pub targets:     u32,
    pub stops:       u64,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:      u64,
    /// Simulated time at the start of the tick.
    pub sim_ms:    u64,
    pub assigned:  u32,
    pub boarded:   u32,
    pub alighted:  u32,
    pub moved:     u32,
    /// Passengers still waiting once the tick is applied.
    pub waiting:   u32,
    pub completed: u32,
}
