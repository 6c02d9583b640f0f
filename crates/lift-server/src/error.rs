use lift_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// A request that was understood but refused.  State is left untouched.
    #[error("{0}")]
    Invalid(String),

    #[error("unknown dispatch policy {0:?} (expected \"scored\", \"nearest\", or \"noop\")")]
    UnknownPolicy(String),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;
