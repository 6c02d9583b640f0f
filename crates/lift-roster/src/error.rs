use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("manifest parse error: {0}")]
    Parse(String),

    #[error("manifest row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error(transparent)]
    Core(#[from] LiftError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RosterResult<T> = Result<T, RosterError>;
