//! The per-elevator state transition run once per tick.

use lift_core::{PassengerId, SimMillis};
use lift_roster::{Direction, Door, Elevator, Passenger, SimulationState};

use crate::{MotionReport, StepOutcome};

/// Applies alighting, boarding, door, direction, and movement to each car.
///
/// Stateless: everything it touches lives in [`SimulationState`].
#[derive(Copy, Clone, Debug, Default)]
pub struct MotionEngine;

impl MotionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Step every elevator in ascending id order.
    pub fn advance(&self, state: &mut SimulationState, now: SimMillis) -> MotionReport {
        let SimulationState { floors, elevators, passengers, .. } = state;
        let mut report = MotionReport::default();
        for elevator in elevators.iter_mut() {
            let step = self.step(elevator, passengers, *floors, now);
            if step.had_activity() {
                log::trace!(
                    "elevator {} at floor {}: {} off, {} on",
                    step.elevator,
                    elevator.current_floor,
                    step.alighted.len(),
                    step.boarded.len()
                );
            }
            report.record(&step);
        }
        report
    }

    /// Run the five motion steps for a single car.
    ///
    /// `passengers` is the full dense roster (ascending id).  Boarding never
    /// admits more than `max_capacity - load` passengers, so the capacity
    /// invariant holds by construction.
    pub fn step(
        &self,
        elevator:   &mut Elevator,
        passengers: &mut [Passenger],
        floors:     u32,
        now:        SimMillis,
    ) -> StepOutcome {
        let here = elevator.current_floor;
        let car = elevator.id;
        let mut out = StepOutcome::new(car);

        // ── ① Alight ──────────────────────────────────────────────────────
        out.alighted = elevator
            .passengers
            .iter()
            .copied()
            .filter(|&id| rider(passengers, id).is_some_and(|p| p.destination_floor == here))
            .collect();
        for id in &out.alighted {
            if let Some(p) = rider_mut(passengers, *id) {
                p.complete(now);
            }
            elevator.passengers.remove(id);
        }
        if !out.alighted.is_empty() {
            elevator.unqueue(here);
        }

        // ── ② Board ───────────────────────────────────────────────────────
        let room = elevator.remaining_capacity();
        out.boarded = passengers
            .iter()
            .filter(|p| p.awaits_pickup(car, here))
            .take(room)
            .map(|p| p.id)
            .collect();
        for id in &out.boarded {
            if let Some(p) = rider_mut(passengers, *id) {
                p.board(now);
                elevator.passengers.insert(*id);
                elevator.queue(p.destination_floor);
            }
        }
        // A queued floor with nobody left to pick up here has been serviced.
        if !passengers.iter().any(|p| p.awaits_pickup(car, here)) {
            elevator.unqueue(here);
        }

        // ── ③ Doors ───────────────────────────────────────────────────────
        if out.had_activity() {
            elevator.door = Door::Open;
            elevator.stops += 1;
        } else {
            elevator.door = Door::Closed;
        }
        out.door = elevator.door;

        // ── ④ Direction ───────────────────────────────────────────────────
        elevator.direction = match elevator.nearest_target() {
            Some(target) => Direction::toward(here, target),
            None         => Direction::Idle,
        };
        out.direction = elevator.direction;

        // ── ⑤ Move ────────────────────────────────────────────────────────
        if elevator.door == Door::Closed && elevator.direction != Direction::Idle {
            let top = floors.saturating_sub(1);
            match elevator.direction {
                Direction::Up if here < top => elevator.current_floor += 1,
                Direction::Down if here > 0 => elevator.current_floor -= 1,
                _ => {}
            }
            elevator.busy_ticks += 1;
            out.moved = true;
        }

        out
    }
}

/// Look up a passenger in the dense roster.
#[inline]
fn rider(passengers: &[Passenger], id: PassengerId) -> Option<&Passenger> {
    id.slot()
        .and_then(|s| passengers.get(s))
        .filter(|p| p.id == id)
}

#[inline]
fn rider_mut(passengers: &mut [Passenger], id: PassengerId) -> Option<&mut Passenger> {
    id.slot()
        .and_then(|s| passengers.get_mut(s))
        .filter(|p| p.id == id)
}
