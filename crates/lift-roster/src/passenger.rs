//! A passenger and its monotonic lifecycle.

use lift_core::{ElevatorId, Floor, PassengerId, SimMillis};

use crate::Direction;

/// Lifecycle status.  Only ever moves forward:
/// `Waiting → Boarded → Completed`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PassengerStatus {
    #[default]
    Waiting,
    Boarded,
    Completed,
}

/// One passenger travelling from `origin_floor` to `destination_floor`.
///
/// Status transitions go through [`board`](Self::board) and
/// [`complete`](Self::complete), which refuse to move backwards and stamp
/// each timestamp exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Passenger {
    pub id:                PassengerId,
    pub origin_floor:      Floor,
    pub destination_floor: Floor,
    pub status:            PassengerStatus,
    /// Elevator committed to picking this passenger up.  Cleared (the
    /// elevator itself is untouched) when the assignment goes stale.
    pub assigned_elevator: Option<ElevatorId>,
    #[cfg_attr(feature = "serde", serde(rename = "arrivalTime"))]
    pub arrival_ms:        SimMillis,
    #[cfg_attr(feature = "serde", serde(rename = "boardTime"))]
    pub board_ms:          Option<SimMillis>,
    #[cfg_attr(feature = "serde", serde(rename = "leaveTime"))]
    pub leave_ms:          Option<SimMillis>,
}

impl Passenger {
    pub fn new(id: PassengerId, origin: Floor, destination: Floor, arrival_ms: SimMillis) -> Self {
        Self {
            id,
            origin_floor:      origin,
            destination_floor: destination,
            status:            PassengerStatus::Waiting,
            assigned_elevator: None,
            arrival_ms,
            board_ms:          None,
            leave_ms:          None,
        }
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.status == PassengerStatus::Waiting
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status == PassengerStatus::Completed
    }

    /// `Up` if the destination is above the origin, otherwise `Down`.
    #[inline]
    pub fn desired_direction(&self) -> Direction {
        Direction::of_trip(self.origin_floor, self.destination_floor)
    }

    /// How long this passenger has been in the building at `now`.
    #[inline]
    pub fn wait_ms(&self, now: SimMillis) -> SimMillis {
        now.saturating_sub(self.arrival_ms)
    }

    /// Waiting, assigned to `elevator`, and standing at `floor`.
    #[inline]
    pub fn awaits_pickup(&self, elevator: ElevatorId, floor: Floor) -> bool {
        self.is_waiting()
            && self.assigned_elevator == Some(elevator)
            && self.origin_floor == floor
    }

    /// `Waiting → Boarded`.  Returns `false` (and changes nothing) from any
    /// other status.
    pub fn board(&mut self, now: SimMillis) -> bool {
        if self.status != PassengerStatus::Waiting {
            return false;
        }
        self.status = PassengerStatus::Boarded;
        self.board_ms.get_or_insert(now);
        true
    }

    /// `Boarded → Completed`.  Returns `false` (and changes nothing) from any
    /// other status.
    pub fn complete(&mut self, now: SimMillis) -> bool {
        if self.status != PassengerStatus::Boarded {
            return false;
        }
        self.status = PassengerStatus::Completed;
        self.leave_ms.get_or_insert(now);
        true
    }
}
