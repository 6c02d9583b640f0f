//! The `Sim` struct and its tick loop.

use lift_core::{SimClock, SimConfig, Tick};
use lift_dispatch::{DispatchContext, DispatchEngine, DispatchPolicy, DispatchReport};
use lift_motion::{MotionEngine, MotionReport};
use lift_roster::SimulationState;

use crate::{RushHourPolicy, SimObserver, Snapshot};

/// What one tick did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick:      Tick,
    pub dispatch:  DispatchReport,
    pub motion:    MotionReport,
    /// Elevators the rush-hour sweep sent back to the lobby.
    pub swept:     usize,
    /// Passengers still waiting once the tick is applied.
    pub waiting:   usize,
    pub completed: usize,
}

/// How a call to [`Sim::run`] ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Ticks executed by this call.
    pub ticks:     u64,
    /// `false` if the run stopped at `config.max_ticks` instead.
    pub completed: bool,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<D>` owns one building and drives the three-phase tick:
///
/// 1. **Dispatch**: [`DispatchEngine`] with policy `D` binds waiting
///    passengers to elevators.
/// 2. **Motion**: [`MotionEngine`] alights, boards, and moves every car in
///    ascending id order.
/// 3. **Rush hour**: [`RushHourPolicy`] pre-positions idle cars at the lobby.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<D: DispatchPolicy> {
    pub config: SimConfig,

    /// Simulated clock.  Every timestamp in the state is read from here.
    pub clock: SimClock,

    pub state: SimulationState,

    pub dispatch: DispatchEngine<D>,

    pub motion: MotionEngine,

    pub rush_hour: RushHourPolicy,
}

impl<D: DispatchPolicy> Sim<D> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the simulation by exactly one tick.
    pub fn tick(&mut self) -> TickReport {
        let tick = self.clock.current_tick;
        let now = self.clock.now_ms();

        let ctx = DispatchContext::new(now, self.config.priority_wait_ms, &self.state);
        let dispatch = self.dispatch.run(&mut self.state, &ctx);
        let motion = self.motion.advance(&mut self.state, now);
        let swept = self.rush_hour.apply(&mut self.state);

        self.clock.advance();
        log::trace!(
            "{tick}: assigned {}, boarded {}, alighted {}, moved {}",
            dispatch.assigned,
            motion.boarded,
            motion.alighted,
            motion.moved
        );
        TickReport {
            tick,
            dispatch,
            motion,
            swept,
            waiting:   self.state.waiting().count(),
            completed: self.state.completed_count(),
        }
    }

    /// One tick with observer hooks.
    pub fn tick_with<O: SimObserver>(&mut self, observer: &mut O) -> TickReport {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let report = self.tick();
        observer.on_tick_end(now, &report);
        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.state);
        }
        report
    }

    /// Tick until every passenger has completed or `config.max_ticks` ticks
    /// have run in total.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunOutcome {
        let start = self.clock.current_tick;
        while !self.is_complete() && self.clock.current_tick.0 < self.config.max_ticks {
            self.tick_with(observer);
        }
        let end = self.clock.current_tick;
        observer.on_sim_end(end, &self.state);

        let outcome = RunOutcome { ticks: end.since(start), completed: self.is_complete() };
        if outcome.completed {
            log::info!("all {} passengers delivered at {}", self.state.passengers.len(), self.clock);
        } else {
            log::warn!("stopped at tick cap {} with passengers outstanding", self.config.max_ticks);
        }
        outcome
    }

    /// Run exactly `n` ticks, ignoring completion and the tick cap.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick_with(observer);
        }
    }

    /// Has every passenger reached `Completed`?  Trivially true with none.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state.all_completed()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.state)
    }

    /// Toggle the morning-rush flag on the live building.
    pub fn set_rush_hour(&mut self, enabled: bool) {
        self.config.rush_hour = enabled;
        self.state.rush_hour = enabled;
    }
}
