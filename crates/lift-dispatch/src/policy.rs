//! The `DispatchPolicy` trait: the swappable seam for assignment heuristics.

use lift_core::{ElevatorId, Floor, PassengerId};
use lift_roster::SimulationState;

use crate::{DispatchContext, NearestCarDispatch, NoopDispatch, ScoredDispatch};

/// Bind `passenger` to `elevator`, queuing `pickup_floor` on the elevator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub passenger:    PassengerId,
    pub elevator:     ElevatorId,
    pub pickup_floor: Floor,
}

/// Assignments produced by one planning pass, in the order they were made.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchPlan {
    pub assignments: Vec<Assignment>,
}

impl DispatchPlan {
    #[inline]
    pub fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Pluggable dispatch heuristic.
///
/// `plan` is called once per tick, after stale assignments have been cleared.
/// It sees the live state read-only and must only assign passengers that are
/// `Waiting` with no `assigned_elevator`, to elevators that still have a
/// free seat once every already-promised passenger is aboard.  Passengers
/// left out of the plan are simply retried next tick.
///
/// # Example
///
/// ```rust,ignore
/// struct FirstCar;
///
/// impl DispatchPolicy for FirstCar {
///     fn name(&self) -> &'static str { "first" }
///
///     fn plan(&self, state: &SimulationState, _ctx: &DispatchContext) -> DispatchPlan {
///         let mut ledger = FleetLedger::from_state(state);
///         let mut plan = DispatchPlan::default();
///         for p in state.waiting().filter(|p| p.assigned_elevator.is_none()) {
///             if let Some(car) = ledger.cars.iter_mut().find(|c| c.has_room()) {
///                 car.promise(p.origin_floor);
///                 plan.push(Assignment { passenger: p.id, elevator: car.id, pickup_floor: p.origin_floor });
///             }
///         }
///         plan
///     }
/// }
/// ```
pub trait DispatchPolicy: Send + Sync + 'static {
    /// Short identifier used in logs and configuration.
    fn name(&self) -> &'static str;

    fn plan(&self, state: &SimulationState, ctx: &DispatchContext) -> DispatchPlan;
}

impl<P: DispatchPolicy + ?Sized> DispatchPolicy for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn plan(&self, state: &SimulationState, ctx: &DispatchContext) -> DispatchPlan {
        (**self).plan(state, ctx)
    }
}

/// Look up a built-in policy by its configuration name.
///
/// | Name        | Policy                 |
/// |-------------|------------------------|
/// | `"scored"`  | [`ScoredDispatch`]     |
/// | `"nearest"` | [`NearestCarDispatch`] |
/// | `"noop"`    | [`NoopDispatch`]       |
pub fn policy_by_name(name: &str) -> Option<Box<dyn DispatchPolicy>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "scored"  => Some(Box::new(ScoredDispatch::default())),
        "nearest" => Some(Box::new(NearestCarDispatch)),
        "noop"    => Some(Box::new(NoopDispatch)),
        _         => None,
    }
}
