//! The scored dispatch heuristic.
//!
//! # Algorithm
//!
//! ```text
//! order   unassigned waiting passengers: priority waits first, then longest
//!         wait first (stable, so equal waits keep ascending id order)
//! for each passenger p (desired direction d = up if dest > origin else down):
//!   for each car c in ascending id with load + promised < capacity:
//!     score = 0
//!       + priority         if p has waited past the threshold
//!       + approach         if c.direction == d and c is on the near side of p.origin
//!       + idle             else if c is idle
//!       + lobby_rush       if rush hour, c idle at the lobby, p going up from the lobby
//!       - queue  * |c.targets|
//!       - distance * |c.floor - p.origin|
//!       - load   * c.load
//!   assign p to the first car with the strictly highest score
//! ```
//!
//! Starvation is bounded only by the priority tier: anyone past the
//! threshold is both ordered first and outscores every fresh request.

use lift_roster::{Direction, Passenger, SimulationState};

use crate::{Assignment, CarLedger, DispatchContext, DispatchPlan, DispatchPolicy, FleetLedger};

/// Additive bonuses and per-unit penalties used by [`ScoredDispatch`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScoreWeights {
    pub priority:   i64,
    pub approach:   i64,
    pub idle:       i64,
    pub lobby_rush: i64,
    pub queue:      i64,
    pub distance:   i64,
    pub load:       i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            priority:   10_000,
            approach:   1_000,
            idle:       800,
            lobby_rush: 3_000,
            queue:      5,
            distance:   1,
            load:       3,
        }
    }
}

/// Priority-ordered, score-based dispatch.  The default policy.
#[derive(Clone, Debug, Default)]
pub struct ScoredDispatch {
    pub weights: ScoreWeights,
}

impl ScoredDispatch {
    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Score `car` for picking up `passenger`.  Higher is better.
    pub fn score(&self, car: &CarLedger, passenger: &Passenger, ctx: &DispatchContext) -> i64 {
        let w = &self.weights;
        let origin = passenger.origin_floor;
        let desired = passenger.desired_direction();
        let mut score = 0;

        if ctx.is_priority(passenger) {
            score += w.priority;
        }

        let approaching = car.direction == desired
            && match desired {
                Direction::Up   => car.current_floor <= origin,
                Direction::Down => car.current_floor >= origin,
                Direction::Idle => false,
            };
        if approaching {
            score += w.approach;
        } else if car.direction == Direction::Idle {
            score += w.idle;
        }

        if ctx.rush_hour
            && car.direction == Direction::Idle
            && car.current_floor == ctx.lobby_floor
            && origin == ctx.lobby_floor
            && desired == Direction::Up
        {
            score += w.lobby_rush;
        }

        score -= w.queue * car.targets.len() as i64;
        score -= w.distance * i64::from(car.current_floor.abs_diff(origin));
        score -= w.load * car.load as i64;
        score
    }
}

/// Unassigned waiting passengers in dispatch order: priority tier first,
/// then longest wait first.  The sort is stable, so ties keep id order.
pub fn dispatch_order<'a>(state: &'a SimulationState, ctx: &DispatchContext) -> Vec<&'a Passenger> {
    let mut queue: Vec<&Passenger> = state
        .waiting()
        .filter(|p| p.assigned_elevator.is_none())
        .collect();
    queue.sort_by(|a, b| {
        ctx.is_priority(b)
            .cmp(&ctx.is_priority(a))
            .then_with(|| ctx.wait_ms(b).cmp(&ctx.wait_ms(a)))
    });
    queue
}

impl DispatchPolicy for ScoredDispatch {
    fn name(&self) -> &'static str {
        "scored"
    }

    fn plan(&self, state: &SimulationState, ctx: &DispatchContext) -> DispatchPlan {
        let mut ledger = FleetLedger::from_state(state);
        let mut plan = DispatchPlan::default();

        for p in dispatch_order(state, ctx) {
            let mut best: Option<(i64, usize)> = None;
            for (i, car) in ledger.cars.iter().enumerate() {
                if !car.has_room() {
                    continue;
                }
                let score = self.score(car, p, ctx);
                // Strictly greater: ties stay with the lower id found first.
                if best.is_none_or(|(top, _)| score > top) {
                    best = Some((score, i));
                }
            }

            let Some((score, i)) = best else {
                log::trace!("passenger {} has no car with room; retrying next tick", p.id);
                continue;
            };
            let car = &mut ledger.cars[i];
            car.promise(p.origin_floor);
            log::trace!("passenger {} -> elevator {} (score {score})", p.id, car.id);
            plan.push(Assignment {
                passenger:    p.id,
                elevator:     car.id,
                pickup_floor: p.origin_floor,
            });
        }

        plan
    }
}
