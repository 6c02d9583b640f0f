//! Per-tick inputs shared by every dispatch policy.

use lift_core::{Floor, SimMillis};
use lift_roster::{Passenger, SimulationState};

/// Clock reading and building flags for one dispatch pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DispatchContext {
    /// Simulated time of the tick being dispatched.
    pub now_ms: SimMillis,

    /// Waits strictly longer than this are priority waits.
    pub priority_wait_ms: SimMillis,

    pub rush_hour: bool,

    pub lobby_floor: Floor,
}

impl DispatchContext {
    pub fn new(now_ms: SimMillis, priority_wait_ms: SimMillis, state: &SimulationState) -> Self {
        Self {
            now_ms,
            priority_wait_ms,
            rush_hour:   state.rush_hour,
            lobby_floor: state.lobby_floor,
        }
    }

    #[inline]
    pub fn wait_ms(&self, passenger: &Passenger) -> SimMillis {
        passenger.wait_ms(self.now_ms)
    }

    /// Has `passenger` waited past the priority threshold?
    #[inline]
    pub fn is_priority(&self, passenger: &Passenger) -> bool {
        self.wait_ms(passenger) > self.priority_wait_ms
    }
}
