//! The status snapshot served to clients.

use lift_roster::{Elevator, Passenger, SimulationState};
use serde::Serialize;

use crate::Metrics;

/// Full copy of the building plus its metrics, as returned by `status` and
/// `tick`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub elevators:  Vec<Elevator>,
    pub floors:     u32,
    pub passengers: Vec<Passenger>,
    pub metrics:    Metrics,
}

impl Snapshot {
    pub fn of(state: &SimulationState) -> Self {
        Self {
            elevators:  state.elevators.clone(),
            floors:     state.floors,
            passengers: state.passengers.clone(),
            metrics:    Metrics::collect(state),
        }
    }

    /// The snapshot of an uninitialised (or reset) simulation.
    pub fn empty() -> Self {
        Self::of(&SimulationState::empty())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
