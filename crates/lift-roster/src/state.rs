//! `SimulationState`: the two rosters plus building-wide flags.
//!
//! Elevators and passengers are both stored densely in ascending id order,
//! so `id.slot()` indexes straight into the `Vec`.  Lookups still verify the
//! id at that slot, which keeps hand-built test states honest.

use lift_core::{ElevatorId, Floor, PassengerId, SimConfig};

use crate::{Elevator, Passenger};

/// All mutable simulation data for one building.
///
/// Created atomically at init, mutated each tick by dispatch and motion,
/// and replaced wholesale at reset.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SimulationState {
    /// Number of floors, numbered `0..floors`.  Zero only for the empty state.
    pub floors: u32,

    pub lobby_floor: Floor,

    /// Morning-rush flag consulted by dispatch scoring and the sweep policy.
    pub rush_hour: bool,

    /// The fleet, ascending by id.
    pub elevators: Vec<Elevator>,

    /// Every passenger ever generated, ascending by id.
    pub passengers: Vec<Passenger>,
}

impl SimulationState {
    /// The state before init and after reset: no building at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A fresh building from `config`: the fleet parked at the lobby with
    /// closed doors, plus the supplied passengers.
    pub fn new(config: &SimConfig, passengers: Vec<Passenger>) -> Self {
        Self {
            floors:      config.num_floors,
            lobby_floor: config.lobby_floor,
            rush_hour:   config.rush_hour,
            elevators:   Self::fleet(config),
            passengers,
        }
    }

    /// `num_elevators` idle cars with ids `1..=N`, all at the lobby.
    pub fn fleet(config: &SimConfig) -> Vec<Elevator> {
        (0..config.num_elevators as usize)
            .map(|slot| Elevator::new(ElevatorId::from_slot(slot), config.lobby_floor, config.max_capacity))
            .collect()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        id.slot()
            .and_then(|s| self.elevators.get(s))
            .filter(|e| e.id == id)
    }

    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        id.slot()
            .and_then(|s| self.passengers.get(s))
            .filter(|p| p.id == id)
    }

    pub fn passenger_mut(&mut self, id: PassengerId) -> Option<&mut Passenger> {
        id.slot()
            .and_then(|s| self.passengers.get_mut(s))
            .filter(|p| p.id == id)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn waiting(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.iter().filter(|p| p.is_waiting())
    }

    /// Waiting passengers already assigned to `elevator`.  Together with the
    /// current load this is the seat count the elevator has promised.
    pub fn waiting_assigned_to(&self, elevator: ElevatorId) -> usize {
        self.waiting()
            .filter(|p| p.assigned_elevator == Some(elevator))
            .count()
    }

    pub fn completed_count(&self) -> usize {
        self.passengers.iter().filter(|p| p.is_completed()).count()
    }

    /// `true` once every passenger has reached `Completed` (vacuously true
    /// for an empty roster).
    pub fn all_completed(&self) -> bool {
        self.passengers.iter().all(Passenger::is_completed)
    }

    /// Any waiting passenger still standing at `floor`?
    pub fn has_waiting_at(&self, floor: Floor) -> bool {
        self.waiting().any(|p| p.origin_floor == floor)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elevators.is_empty() && self.passengers.is_empty()
    }
}
