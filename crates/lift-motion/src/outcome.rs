//! Results of running the motion step.

use lift_core::{ElevatorId, PassengerId};
use lift_roster::{Direction, Door};

/// What happened to one elevator during one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub elevator:  ElevatorId,
    /// Riders who reached their destination, ascending by id.
    pub alighted:  Vec<PassengerId>,
    /// Passengers who boarded, ascending by id.
    pub boarded:   Vec<PassengerId>,
    pub door:      Door,
    pub direction: Direction,
    /// `true` if the car changed floor (or spent the tick trying to).
    pub moved:     bool,
}

impl StepOutcome {
    /// Nothing happened yet: no riders moved, doors closed, car idle.
    pub fn new(elevator: ElevatorId) -> Self {
        Self {
            elevator,
            alighted:  Vec::new(),
            boarded:   Vec::new(),
            door:      Door::Closed,
            direction: Direction::Idle,
            moved:     false,
        }
    }

    /// Did the doors open for anyone this tick?
    #[inline]
    pub fn had_activity(&self) -> bool {
        !self.alighted.is_empty() || !self.boarded.is_empty()
    }
}

/// Fleet-wide totals for one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MotionReport {
    pub alighted: usize,
    pub boarded:  usize,
    pub stopped:  usize,
    pub moved:    usize,
}

impl MotionReport {
    pub fn record(&mut self, step: &StepOutcome) {
        self.alighted += step.alighted.len();
        self.boarded += step.boarded.len();
        if step.door == Door::Open {
            self.stopped += 1;
        }
        if step.moved {
            self.moved += 1;
        }
    }
}
