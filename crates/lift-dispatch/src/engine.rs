//! `DispatchEngine`: the dispatch phase of a tick.

use lift_core::{ElevatorId, PassengerId};
use lift_roster::SimulationState;

use crate::{DispatchContext, DispatchPolicy, FleetLedger};

/// Counts from one dispatch pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Stale assignments cleared before planning.
    pub cleared:    usize,
    /// New assignments applied.
    pub assigned:   usize,
    /// Waiting passengers still without an elevator afterwards.
    pub unassigned: usize,
}

/// Runs a [`DispatchPolicy`] against the live state.
///
/// # Phases
///
/// 1. **Sweep**: clear any waiting passenger's assignment whose elevator is
///    gone, full, or neither queued for nor parked at the pickup floor.
/// 2. **Plan**: `policy.plan(&state, ctx)` (read-only).
/// 3. **Apply**: write each assignment in plan order and queue the pickup
///    floor.  Assignments that no longer fit (passenger not an unassigned
///    waiter, elevator missing, or out of promised seats) are dropped.
pub struct DispatchEngine<P: DispatchPolicy> {
    pub policy: P,
}

impl<P: DispatchPolicy> DispatchEngine<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn run(&self, state: &mut SimulationState, ctx: &DispatchContext) -> DispatchReport {
        let cleared = clear_stale_assignments(state);
        let plan = self.policy.plan(state, ctx);

        // Seats already spoken for, per elevator slot.
        let mut promised: Vec<usize> = FleetLedger::from_state(state)
            .cars
            .iter()
            .map(|c| c.load + c.promised)
            .collect();

        let mut assigned = 0;
        for a in plan.assignments {
            let Some(slot) = a.elevator.slot().filter(|&s| {
                state.elevators.get(s).is_some_and(|e| e.id == a.elevator)
            }) else {
                log::warn!("{} planned unknown elevator {}", self.policy.name(), a.elevator);
                continue;
            };
            if promised[slot] >= state.elevators[slot].max_capacity as usize {
                log::warn!("{} overbooked elevator {}", self.policy.name(), a.elevator);
                continue;
            }
            let Some(p) = state
                .passenger_mut(a.passenger)
                .filter(|p| p.is_waiting() && p.assigned_elevator.is_none())
            else {
                continue;
            };
            p.assigned_elevator = Some(a.elevator);
            state.elevators[slot].queue(a.pickup_floor);
            promised[slot] += 1;
            assigned += 1;
        }

        let unassigned = state
            .waiting()
            .filter(|p| p.assigned_elevator.is_none())
            .count();

        DispatchReport { cleared, assigned, unassigned }
    }
}

/// Clear assignments that can no longer lead to a pickup.  Returns how many
/// were cleared.
///
/// An assignment is stale when the elevator no longer exists, is at full
/// capacity, or has neither the passenger's origin queued nor is standing
/// at it.
pub fn clear_stale_assignments(state: &mut SimulationState) -> usize {
    let stale: Vec<(PassengerId, ElevatorId)> = state
        .waiting()
        .filter_map(|p| {
            let id = p.assigned_elevator?;
            let is_stale = match state.elevator(id) {
                None => true,
                Some(e) => {
                    e.is_full()
                        || (!e.has_target(p.origin_floor) && e.current_floor != p.origin_floor)
                }
            };
            is_stale.then_some((p.id, id))
        })
        .collect();

    for &(pid, eid) in &stale {
        if let Some(p) = state.passenger_mut(pid) {
            p.assigned_elevator = None;
        }
        log::debug!("cleared stale assignment of passenger {pid} to elevator {eid}");
    }
    stale.len()
}
