//! Nearest-car dispatch.

use lift_roster::SimulationState;

use crate::{Assignment, DispatchContext, DispatchPlan, DispatchPolicy, FleetLedger};

/// Assign each unassigned waiting passenger, in id order, to the closest car
/// that still has a seat.  Equal distances go to the lowest elevator id.
///
/// Ignores direction, queue length, and wait time.
pub struct NearestCarDispatch;

impl DispatchPolicy for NearestCarDispatch {
    fn name(&self) -> &'static str {
        "nearest"
    }

    fn plan(&self, state: &SimulationState, _ctx: &DispatchContext) -> DispatchPlan {
        let mut ledger = FleetLedger::from_state(state);
        let mut plan = DispatchPlan::default();

        for p in state.waiting().filter(|p| p.assigned_elevator.is_none()) {
            let origin = p.origin_floor;
            let closest = ledger
                .cars
                .iter_mut()
                .filter(|c| c.has_room())
                .min_by_key(|c| c.current_floor.abs_diff(origin));

            if let Some(car) = closest {
                car.promise(origin);
                plan.push(Assignment { passenger: p.id, elevator: car.id, pickup_floor: origin });
            }
        }

        plan
    }
}
