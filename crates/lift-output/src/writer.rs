//! The `OutputWriter` trait implemented by output backends.

use crate::{ElevatorSnapshotRow, OutputResult, TickSummaryRow};

/// A sink for simulation output.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with `take_error` once the run is over.
pub trait OutputWriter {
    /// Write one row per elevator for a snapshot tick.
    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()>;

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.  Safe to call twice.
    fn finish(&mut self) -> OutputResult<()>;
}
