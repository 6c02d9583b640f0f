//! Fluent builder for constructing a [`Sim`].

use lift_core::{PassengerId, SimConfig};
use lift_dispatch::{DispatchEngine, DispatchPolicy};
use lift_motion::MotionEngine;
use lift_roster::{Passenger, PassengerGenerator, SimulationState};

use crate::{RushHourPolicy, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<D>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: counts, capacity, lobby, seed, …
/// - `D: DispatchPolicy`: e.g. [`lift_dispatch::ScoredDispatch`]
///
/// # Optional inputs
///
/// | Method              | Default                                          |
/// |---------------------|--------------------------------------------------|
/// | `.passengers(v)`    | `PassengerGenerator::from_config(&config)`       |
///
/// # Example
///
/// ```rust,ignore
/// let passengers = lift_roster::load_manifest_csv(path, config.num_floors)?;
/// let mut sim = SimBuilder::new(config, ScoredDispatch::default())
///     .passengers(passengers)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<D: DispatchPolicy> {
    config:     SimConfig,
    policy:     D,
    passengers: Option<Vec<Passenger>>,
}

impl<D: DispatchPolicy> SimBuilder<D> {
    pub fn new(config: SimConfig, policy: D) -> Self {
        Self { config, policy, passengers: None }
    }

    /// Supply the passenger roster instead of generating one.
    ///
    /// Ids must run `1..=n` in order, floors must lie inside the building,
    /// and every passenger must start out `Waiting` and unassigned.
    /// `config.num_passengers` is overwritten with `n`.
    pub fn passengers(mut self, passengers: Vec<Passenger>) -> Self {
        self.passengers = Some(passengers);
        self
    }

    /// Validate inputs, build the fleet and roster, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<D>> {
        let mut config = self.config;
        config.validate()?;

        let passengers = match self.passengers {
            Some(p) => {
                check_roster(&p, config.num_floors)?;
                config.num_passengers = p.len() as u32;
                p
            }
            None => PassengerGenerator::from_config(&config).generate()?,
        };

        log::info!(
            "building {} elevators, {} floors, {} passengers (rush hour {})",
            config.num_elevators,
            config.num_floors,
            passengers.len(),
            if config.rush_hour { "on" } else { "off" }
        );

        Ok(Sim {
            clock:     config.make_clock(),
            state:     SimulationState::new(&config, passengers),
            dispatch:  DispatchEngine::new(self.policy),
            motion:    MotionEngine::new(),
            rush_hour: RushHourPolicy::from_config(&config),
            config,
        })
    }
}

fn check_roster(passengers: &[Passenger], floors: u32) -> SimResult<()> {
    for (slot, p) in passengers.iter().enumerate() {
        let invalid = |reason: String| SimError::InvalidPassenger { id: p.id, reason };
        if p.id != PassengerId::from_slot(slot) {
            return Err(invalid(format!("expected id {}", PassengerId::from_slot(slot))));
        }
        if p.origin_floor >= floors || p.destination_floor >= floors {
            return Err(invalid(format!("trip {} -> {} leaves a {floors}-floor building", p.origin_floor, p.destination_floor)));
        }
        if p.origin_floor == p.destination_floor {
            return Err(invalid("origin equals destination".into()));
        }
        if !p.is_waiting() || p.assigned_elevator.is_some() {
            return Err(invalid("must start waiting and unassigned".into()));
        }
    }
    Ok(())
}
