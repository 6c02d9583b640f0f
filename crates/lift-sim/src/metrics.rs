//! Aggregate wait and travel statistics.

use std::fmt;

use lift_core::ElevatorId;
use lift_roster::{Passenger, SimulationState};
use serde::Serialize;

/// Stop count for one elevator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ElevatorStops {
    pub id:    ElevatorId,
    pub stops: u64,
}

/// A read-only projection of the rosters.
///
/// Averages are in seconds, rounded to two decimals, and are `0` when no
/// passenger has completed yet.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub avg_wait:           f64,
    pub avg_travel:         f64,
    pub completed:          usize,
    pub total:              usize,
    pub stops_per_elevator: Vec<ElevatorStops>,
}

impl Metrics {
    pub fn collect(state: &SimulationState) -> Self {
        let completed: Vec<&Passenger> = state.passengers.iter().filter(|p| p.is_completed()).collect();

        let avg_wait = mean_secs(completed.iter().map(|p| {
            p.board_ms.unwrap_or(p.arrival_ms).saturating_sub(p.arrival_ms)
        }), completed.len());
        let avg_travel = mean_secs(completed.iter().filter_map(|p| {
            Some(p.leave_ms?.saturating_sub(p.board_ms?))
        }), completed.len());

        Self {
            avg_wait,
            avg_travel,
            completed: completed.len(),
            total: state.passengers.len(),
            stops_per_elevator: state
                .elevators
                .iter()
                .map(|e| ElevatorStops { id: e.id, stops: e.stops })
                .collect(),
        }
    }

    /// `true` once every passenger has completed.  An empty roster counts.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} completed, avg wait {:.2}s, avg travel {:.2}s",
            self.completed, self.total, self.avg_wait, self.avg_travel
        )
    }
}

/// Mean of `millis` over `count` samples, in seconds to two decimals.
fn mean_secs(millis: impl Iterator<Item = u64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let total: u64 = millis.sum();
    round2(total as f64 / count as f64 / 1000.0)
}

#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
