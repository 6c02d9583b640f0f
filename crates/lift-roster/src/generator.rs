//! Seeded passenger generation.
//!
//! # Usage
//!
//! ```rust
//! use lift_roster::PassengerGenerator;
//!
//! let passengers = PassengerGenerator::new(20, /*floors=*/ 10, /*seed=*/ 42)
//!     .rush_hour(0)
//!     .generate()
//!     .unwrap();
//!
//! assert_eq!(passengers.len(), 20);
//! assert!(passengers.iter().all(|p| p.origin_floor == 0));
//! ```

use lift_core::{Floor, LiftError, PassengerId, SimConfig, SimRng};

use crate::{Passenger, RosterResult};

/// Fluent builder producing the initial passenger roster.
///
/// Every passenger arrives at simulated time 0 with `origin != destination`.
pub struct PassengerGenerator {
    count:      usize,
    floors:     u32,
    seed:       u64,
    /// `Some(lobby)` forces every origin to the lobby (morning rush).
    rush_lobby: Option<Floor>,
}

impl PassengerGenerator {
    pub fn new(count: usize, floors: u32, seed: u64) -> Self {
        Self { count, floors, seed, rush_lobby: None }
    }

    /// Builder pre-filled from `config` (count, floors, seed, rush bias).
    pub fn from_config(config: &SimConfig) -> Self {
        let generator = Self::new(config.num_passengers as usize, config.num_floors, config.seed);
        if config.rush_hour {
            generator.rush_hour(config.lobby_floor)
        } else {
            generator
        }
    }

    /// Bias generation toward a morning rush: every origin is `lobby`.
    pub fn rush_hour(mut self, lobby: Floor) -> Self {
        self.rush_lobby = Some(lobby);
        self
    }

    /// Draw the roster.  Ids run `1..=count` in generation order.
    pub fn generate(self) -> RosterResult<Vec<Passenger>> {
        if self.floors < 2 {
            return Err(LiftError::Config(format!(
                "cannot generate trips in a building with {} floor(s)",
                self.floors
            ))
            .into());
        }
        if let Some(lobby) = self.rush_lobby.filter(|&l| l >= self.floors) {
            return Err(LiftError::FloorOutOfRange { floor: lobby, floors: self.floors }.into());
        }

        let mut rng = SimRng::new(self.seed);
        let mut id = PassengerId::FIRST;
        let mut out = Vec::with_capacity(self.count);

        for _ in 0..self.count {
            let origin = match self.rush_lobby {
                Some(lobby) => lobby,
                None        => rng.gen_range(0..self.floors),
            };
            // Draw from the other floors-1 floors and skip over the origin.
            let mut destination = rng.gen_range(0..self.floors - 1);
            if destination >= origin {
                destination += 1;
            }
            out.push(Passenger::new(id, origin, destination, 0));
            id = id.next();
        }

        log::debug!("generated {} passengers across {} floors", out.len(), self.floors);
        Ok(out)
    }
}
