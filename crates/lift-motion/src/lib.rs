//! `lift-motion`: what every elevator does with one tick.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`outcome`] | `StepOutcome` (one car), `MotionReport` (whole fleet)     |
//! | [`engine`]  | `MotionEngine`: the five-step per-car state transition   |
//!
//! # Movement model (one floor per tick)
//!
//! For each elevator, in ascending id order:
//!
//! 1. **Alight**: riders whose destination is the current floor complete.
//! 2. **Board**: waiting passengers assigned to this car at this floor
//!    board in id order, up to the free seats.
//! 3. **Doors**: open (and count a stop) if anyone got off or on;
//!    an open door holds the car on this floor for the tick.
//! 4. **Direction**: toward the nearest queued floor, `Idle` if none.
//! 5. **Move**: one floor, only with closed doors and a direction.
//!
//! Elevators never look at each other within a tick.

pub mod engine;
pub mod outcome;


pub use engine::MotionEngine;
pub use outcome::{MotionReport, StepOutcome};
