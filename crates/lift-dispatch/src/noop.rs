//! A dispatch policy that never assigns anyone.

use lift_roster::SimulationState;

use crate::{DispatchContext, DispatchPlan, DispatchPolicy};

/// A [`DispatchPolicy`] that always returns an empty plan.
///
/// Useful in tests that drive motion by hand-assigning passengers.
pub struct NoopDispatch;

impl DispatchPolicy for NoopDispatch {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn plan(&self, _state: &SimulationState, _ctx: &DispatchContext) -> DispatchPlan {
        DispatchPlan::default()
    }
}
