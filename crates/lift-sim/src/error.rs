use lift_core::{LiftError, PassengerId};
use lift_roster::RosterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] LiftError),

    #[error("passenger {id}: {reason}")]
    InvalidPassenger {
        id:     PassengerId,
        reason: String,
    },

    #[error("passenger roster error: {0}")]
    Roster(#[from] RosterError),
}

pub type SimResult<T> = Result<T, SimError>;
