//! Planning-time copy of each car's seats and queued floors.

use std::collections::BTreeSet;

use lift_core::{ElevatorId, Floor};
use lift_roster::{Direction, SimulationState};

/// What a policy needs to know about one car while it plans, updated as the
/// policy hands out assignments within a single tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarLedger {
    pub id:            ElevatorId,
    pub current_floor: Floor,
    pub direction:     Direction,
    /// Passengers aboard.
    pub load:          usize,
    /// Waiting passengers already assigned to this car.
    pub promised:      usize,
    pub capacity:      usize,
    pub targets:       BTreeSet<Floor>,
}

impl CarLedger {
    /// Would one more assignment still fit once everyone promised is aboard?
    #[inline]
    pub fn has_room(&self) -> bool {
        self.load + self.promised < self.capacity
    }

    /// Record an assignment picking up at `floor`.
    #[inline]
    pub fn promise(&mut self, floor: Floor) {
        self.promised += 1;
        self.targets.insert(floor);
    }
}

/// One `CarLedger` per elevator, ascending by id.
#[derive(Clone, Debug, Default)]
pub struct FleetLedger {
    pub cars: Vec<CarLedger>,
}

impl FleetLedger {
    /// Snapshot the fleet.  O(elevators + passengers).
    pub fn from_state(state: &SimulationState) -> Self {
        let mut cars: Vec<CarLedger> = state
            .elevators
            .iter()
            .map(|e| CarLedger {
                id:            e.id,
                current_floor: e.current_floor,
                direction:     e.direction,
                load:          e.load(),
                promised:      0,
                capacity:      e.max_capacity as usize,
                targets:       e.target_floors.clone(),
            })
            .collect();

        for p in state.waiting() {
            if let Some(car) = p
                .assigned_elevator
                .and_then(|id| id.slot().and_then(|s| cars.get_mut(s)).filter(|c| c.id == id))
            {
                car.promised += 1;
            }
        }

        Self { cars }
    }
}
