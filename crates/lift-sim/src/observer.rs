//! Simulation observer trait for progress reporting and data collection.

use lift_core::Tick;
use lift_roster::SimulationState;

use crate::TickReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::tick_with`][crate::Sim::tick_with].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
///         if report.motion.alighted > 0 {
///             println!("{tick}: {} arrived", report.motion.alighted);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before dispatch.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after all three phases of the tick have been applied.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Called every `config.output_interval_ticks` ticks with the state as
    /// it stands at the end of the tick.
    fn on_snapshot(&mut self, _tick: Tick, _state: &SimulationState) {}

    /// Called once when `run` stops, whether by completion or by the tick cap.
    fn on_sim_end(&mut self, _final_tick: Tick, _state: &SimulationState) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
