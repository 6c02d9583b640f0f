//! Wire types: one JSON object per line in each direction.
//!
//! ```text
//! → {"op":"init","numElevators":3,"numFloors":10,"numPassengers":20}
//! ← {"ok":true}
//! → {"op":"status"}
//! ← {"elevators":[...],"floors":10,"passengers":[...],"metrics":{...}}
//! → {"op":"speed","speed":0}
//! ← {"ok":false,"error":"speed must be a positive number, got 0"}
//! ```

use lift_sim::Snapshot;
use serde::{Deserialize, Serialize};

/// A client request, tagged by `op`.
///
/// Counts are signed so that negative values reach validation and are
/// rejected with a readable message instead of a parse error.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Request {
    #[serde(rename_all = "camelCase")]
    Init {
        num_elevators:  i64,
        num_floors:     i64,
        num_passengers: i64,
    },
    Status,
    Tick,
    Speed {
        speed: f64,
    },
    Reset,
    RushHour {
        enabled: bool,
    },
}

/// A server reply.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Ack { ok: bool },
    Snapshot(Box<Snapshot>),
    Rejected { ok: bool, error: String },
}

impl Response {
    pub fn ack() -> Self {
        Response::Ack { ok: true }
    }

    pub fn rejected(error: impl ToString) -> Self {
        Response::Rejected { ok: false, error: error.to_string() }
    }

    pub fn snapshot(snapshot: Snapshot) -> Self {
        Response::Snapshot(Box::new(snapshot))
    }

    pub fn is_ok(&self) -> bool {
        !matches!(self, Response::Rejected { .. })
    }
}
