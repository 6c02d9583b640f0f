//! `lift-core`: foundational types for the lift simulation workspace.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `ElevatorId`, `PassengerId`, `Floor`                  |
//! | [`time`]    | `Tick`, `SimClock`, `SimMillis`                       |
//! | [`rng`]     | `SimRng` (seeded, deterministic)                      |
//! | [`config`]  | `SimConfig` and its validation                        |
//! | [`error`]   | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{LiftError, LiftResult};
pub use ids::{ElevatorId, Floor, PassengerId};
pub use rng::SimRng;
pub use time::{SimClock, SimMillis, Tick};
