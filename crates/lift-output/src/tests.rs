//! Integration tests for lift-output.

#[cfg(test)]
mod csv_tests {
    use lift_roster::{Direction, Door};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{ElevatorSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(elevator_id: u32, tick: u64) -> ElevatorSnapshotRow {
        ElevatorSnapshotRow {
            elevator_id,
            tick,
            floor:     elevator_id + 2,
            direction: Direction::Up,
            door:      Door::Closed,
            load:      1,
            targets:   2,
            stops:     0,
        }
    }

    fn read_rows(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("tick_summaries.csv").exists());
        assert!(dir.path().join("elevator_snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("elevator_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["elevator_id", "tick", "floor", "direction", "door", "load", "targets", "stops"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["tick", "sim_ms", "assigned", "boarded", "alighted", "moved", "waiting", "completed"]
        );
    }

    #[test]
    fn snapshot_rows_use_wire_labels() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(1, 4), snap_row(2, 4)]).unwrap();
        w.finish().unwrap();

        let rows = read_rows(dir.path().join("elevator_snapshots.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][2], "3");      // floor
        assert_eq!(&rows[0][3], "up");
        assert_eq!(&rows[0][4], "closed");
        assert_eq!(&rows[1][0], "2");
    }

    #[test]
    fn tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = TickSummaryRow {
            tick: 3, sim_ms: 3_000, assigned: 2, boarded: 1, alighted: 0, moved: 1, waiting: 4, completed: 0,
        };
        w.write_tick_summary(&row).unwrap();
        w.finish().unwrap();

        let rows = read_rows(dir.path().join("tick_summaries.csv"));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "3000");
        assert_eq!(&rows[0][6], "4");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use lift_core::SimConfig;
    use lift_dispatch::ScoredDispatch;
    use lift_sim::SimBuilder;

    use crate::{CsvWriter, ElevatorSnapshotRow, OutputResult, OutputWriter, SimOutputObserver, TickSummaryRow};

    /// Collects rows in memory.
    #[derive(Default)]
    struct Memory {
        summaries: Vec<TickSummaryRow>,
        snapshots: Vec<ElevatorSnapshotRow>,
        finished:  usize,
    }

    impl OutputWriter for Memory {
        fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
            self.snapshots.extend_from_slice(rows);
            Ok(())
        }
        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    /// Fails every write.
    struct Broken;

    impl OutputWriter for Broken {
        fn write_snapshots(&mut self, _rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
            Err(std::io::Error::other("disk full").into())
        }
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            Err(std::io::Error::other("disk full").into())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    fn config() -> SimConfig {
        SimConfig { output_interval_ticks: 2, ..SimConfig::default().with_counts(2, 6, 6) }
    }

    #[test]
    fn one_summary_per_tick() {
        let cfg = config();
        let mut sim = SimBuilder::new(cfg.clone(), ScoredDispatch::default()).build().unwrap();
        let mut obs = SimOutputObserver::new(Memory::default(), &cfg);
        let outcome = sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let mem = obs.into_writer();
        assert_eq!(mem.summaries.len() as u64, outcome.ticks);
        assert_eq!(mem.finished, 1);

        let last = mem.summaries.last().unwrap();
        assert_eq!((last.waiting, last.completed), (0, 6));
        assert_eq!(mem.summaries[1].sim_ms, 1_000);
        assert_eq!(mem.summaries.iter().map(|r| r.alighted).sum::<u32>(), 6);

        // Two elevators per snapshot, every second tick.
        assert_eq!(mem.snapshots.len() as u64, 2 * outcome.ticks.div_ceil(2));
        assert!(mem.snapshots.iter().all(|r| r.tick % 2 == 0));
    }

    #[test]
    fn first_error_kept() {
        let cfg = config();
        let mut sim = SimBuilder::new(cfg.clone(), ScoredDispatch::default()).build().unwrap();
        let mut obs = SimOutputObserver::new(Broken, &cfg);
        sim.run_ticks(3, &mut obs);
        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn integration_csv() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config();
        let mut sim = SimBuilder::new(cfg.clone(), ScoredDispatch::default()).build().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &cfg);
        let outcome = sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count() as u64, outcome.ticks);
    }
}
