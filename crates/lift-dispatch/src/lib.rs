//! `lift-dispatch`: binding waiting passengers to elevators.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                         |
//! |-------------|------------------------------------------------------------------|
//! | [`context`] | `DispatchContext`: clock and building flags for one tick        |
//! | [`ledger`]  | `FleetLedger`: working copy of seats and targets while planning |
//! | [`policy`]  | `DispatchPolicy` trait, `DispatchPlan`, `Assignment`             |
//! | [`scored`]  | `ScoredDispatch`: priority-ordered scored heuristic (default)   |
//! | [`nearest`] | `NearestCarDispatch`: closest car with room                     |
//! | [`noop`]    | `NoopDispatch`: never assigns                                   |
//! | [`engine`]  | `DispatchEngine`: stale-assignment sweep, plan, apply           |
//!
//! # Design notes
//!
//! Dispatch runs in two phases, mirroring the rest of the tick:
//!
//! 1. **Plan** (read-only): the policy sees `&SimulationState` and returns a
//!    `DispatchPlan`.  Policies that need to account for their own earlier
//!    choices within the same tick (seat counts, queued floors) do so on a
//!    `FleetLedger`, never on the live state.
//!
//! 2. **Apply** (sequential): `DispatchEngine` writes each assignment to the
//!    passenger and queues the pickup floor on the elevator.
//!
//! Absence of capacity is never an error: the passenger simply stays
//! unassigned and is reconsidered on the next tick.

pub mod context;
pub mod engine;
pub mod ledger;
pub mod nearest;
pub mod noop;
pub mod policy;
pub mod scored;


pub use context::DispatchContext;
pub use engine::{DispatchEngine, DispatchReport, clear_stale_assignments};
pub use ledger::{CarLedger, FleetLedger};
pub use nearest::NearestCarDispatch;
pub use noop::NoopDispatch;
pub use policy::{Assignment, DispatchPlan, DispatchPolicy, policy_by_name};
pub use scored::{ScoreWeights, ScoredDispatch, dispatch_order};
