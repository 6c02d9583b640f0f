//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use lift_core::{SimConfig, Tick};
use lift_roster::SimulationState;
use lift_sim::{SimObserver, TickReport};

use crate::row::{ElevatorSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries and elevator snapshots to any
/// [`OutputWriter`].
///
/// `SimObserver` methods have no return value, so the first write error is
/// kept here.  Check it with [`take_error`][Self::take_error] after the run.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:           W,
    tick_duration_ms: u64,
    last_error:       Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_duration_ms: config.tick_duration_ms,
            last_error:       None,
        }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            log::warn!("output write failed: {e}");
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        let row = TickSummaryRow {
            tick:      tick.0,
            sim_ms:    tick.0 * self.tick_duration_ms,
            assigned:  report.dispatch.assigned as u32,
            boarded:   report.motion.boarded as u32,
            alighted:  report.motion.alighted as u32,
            moved:     report.motion.moved as u32,
            waiting:   report.waiting as u32,
            completed: report.completed as u32,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, state: &SimulationState) {
        let rows: Vec<ElevatorSnapshotRow> = state
            .elevators
            .iter()
            .map(|e| ElevatorSnapshotRow {
                elevator_id: e.id.0,
                tick:        tick.0,
                floor:       e.current_floor,
                direction:   e.direction,
                door:        e.door,
                load:        e.load() as u32,
                targets:     e.target_floors.len() as u32,
                stops:       e.stops,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _state: &SimulationState) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
