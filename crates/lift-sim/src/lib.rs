//! `lift-sim`: tick driver for the lift simulation.
//!
//! # One tick
//!
//! ```text
//! now = clock.now_ms()
//!   ① Dispatch : clear stale assignments, plan, apply (DispatchEngine)
//!   ② Motion   : alight, board, doors, direction, move (MotionEngine)
//!   ③ Rush hour: steer idle empty cars back to the lobby (RushHourPolicy)
//! clock.advance()
//! ```
//!
//! Each phase sees the complete result of the one before it.  Nothing outside
//! `Sim` can observe the state between phases because `tick` holds `&mut self`
//! for the whole tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_dispatch::ScoredDispatch;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), ScoredDispatch::default()).build()?;
//! let outcome = sim.run(&mut NoopObserver);
//! println!("{}", sim.snapshot().metrics);
//! ```

pub mod builder;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod rush_hour;
pub mod sim;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use metrics::{ElevatorStops, Metrics};
pub use observer::{NoopObserver, SimObserver};
pub use rush_hour::RushHourPolicy;
pub use sim::{RunOutcome, Sim, TickReport};
pub use snapshot::Snapshot;
