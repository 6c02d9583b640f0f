//! `lift-roster`: elevator and passenger rosters for the lift simulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`elevator`]  | `Elevator`, `Direction`, `Door`                           |
//! | [`passenger`] | `Passenger`, `PassengerStatus`                            |
//! | [`state`]     | `SimulationState`: floors, fleet, passengers, rush flag  |
//! | [`generator`] | `PassengerGenerator` (seeded, optional rush-hour bias)    |
//! | [`manifest`]  | CSV passenger manifest loader                             |
//! | [`error`]     | `RosterError`, `RosterResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` with the camelCase field |
//! |         | names used on the wire.                                    |

pub mod elevator;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod passenger;
pub mod state;


pub use elevator::{Direction, Door, Elevator};
pub use error::{RosterError, RosterResult};
pub use generator::PassengerGenerator;
pub use manifest::{load_manifest_csv, load_manifest_reader};
pub use passenger::{Passenger, PassengerStatus};
pub use state::SimulationState;
