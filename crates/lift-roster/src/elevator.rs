//! A single elevator car and its per-tick observable state.

use std::collections::BTreeSet;

use lift_core::{ElevatorId, Floor, PassengerId};

/// Travel direction.  Derived every tick from the nearest target floor;
/// it is not a persisted intent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl Direction {
    /// The direction that moves `from` toward `to` (`Idle` when equal).
    #[inline]
    pub fn toward(from: Floor, to: Floor) -> Direction {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less    => Direction::Down,
            std::cmp::Ordering::Equal   => Direction::Idle,
        }
    }

    /// Direction a passenger travels from `origin` to `destination`.
    /// Anything that is not strictly upward counts as `Down`.
    #[inline]
    pub fn of_trip(origin: Floor, destination: Floor) -> Direction {
        if destination > origin { Direction::Up } else { Direction::Down }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
            Direction::Idle => "idle",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Door {
    Open,
    #[default]
    Closed,
}

impl Door {
    pub fn as_str(self) -> &'static str {
        match self {
            Door::Open   => "open",
            Door::Closed => "closed",
        }
    }
}

/// One elevator car.
///
/// `passengers` and `target_floors` are ordered sets: membership and dedup
/// are O(log n), and iteration order is ascending, which keeps every
/// snapshot byte-identical across runs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Elevator {
    pub id:            ElevatorId,
    pub current_floor: Floor,
    pub direction:     Direction,
    pub door:          Door,
    /// Passengers currently aboard.  Never larger than `max_capacity`.
    pub passengers:    BTreeSet<PassengerId>,
    /// Floors still to visit for a pickup or a drop-off.
    pub target_floors: BTreeSet<Floor>,
    pub max_capacity:  u32,
    /// Ticks spent moving between floors.
    pub busy_ticks:    u64,
    /// Ticks in which the doors opened.
    pub stops:         u64,
}

impl Elevator {
    /// An idle, empty car with closed doors parked at `floor`.
    pub fn new(id: ElevatorId, floor: Floor, max_capacity: u32) -> Self {
        Self {
            id,
            current_floor: floor,
            direction:     Direction::Idle,
            door:          Door::Closed,
            passengers:    BTreeSet::new(),
            target_floors: BTreeSet::new(),
            max_capacity,
            busy_ticks:    0,
            stops:         0,
        }
    }

    #[inline]
    pub fn load(&self) -> usize {
        self.passengers.len()
    }

    /// Free seats right now, ignoring passengers assigned but not yet aboard.
    #[inline]
    pub fn remaining_capacity(&self) -> usize {
        (self.max_capacity as usize).saturating_sub(self.passengers.len())
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.remaining_capacity() == 0
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.direction == Direction::Idle
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    #[inline]
    pub fn has_target(&self, floor: Floor) -> bool {
        self.target_floors.contains(&floor)
    }

    /// Queue `floor` for a visit.  Returns `false` if it was already queued.
    #[inline]
    pub fn queue(&mut self, floor: Floor) -> bool {
        self.target_floors.insert(floor)
    }

    #[inline]
    pub fn unqueue(&mut self, floor: Floor) -> bool {
        self.target_floors.remove(&floor)
    }

    /// The queued floor closest to the current floor.
    ///
    /// Ties between a floor below and a floor above resolve to the lower
    /// floor (first in ascending iteration order).
    pub fn nearest_target(&self) -> Option<Floor> {
        let here = self.current_floor;
        self.target_floors
            .iter()
            .copied()
            .min_by_key(|&f| f.abs_diff(here))
    }
}
