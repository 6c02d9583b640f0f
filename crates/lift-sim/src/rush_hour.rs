//! The morning-rush lobby sweep.

use lift_core::SimConfig;
use lift_roster::SimulationState;

/// Steers idle, empty elevators back to the lobby while lobby demand remains.
///
/// Runs after motion.  Only the first `bound` elevators (ascending id) are
/// ever steered, so with the default bound of one the rest of the fleet is
/// left entirely to dispatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RushHourPolicy {
    pub bound: usize,
}

impl RushHourPolicy {
    pub fn new(bound: usize) -> Self {
        Self { bound }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.rush_hour_elevators as usize)
    }

    /// Queue the lobby on eligible cars.  Returns how many were steered.
    pub fn apply(&self, state: &mut SimulationState) -> usize {
        let lobby = state.lobby_floor;
        if !state.rush_hour || !state.has_waiting_at(lobby) {
            return 0;
        }

        let mut steered = 0;
        for elevator in state.elevators.iter_mut().take(self.bound) {
            if elevator.is_idle() && elevator.is_empty() && elevator.queue(lobby) {
                log::trace!("rush hour: elevator {} sent to lobby {lobby}", elevator.id);
                steered += 1;
            }
        }
        steered
    }
}

impl Default for RushHourPolicy {
    fn default() -> Self {
        Self::new(1)
    }
}
