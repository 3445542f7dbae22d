//! Integration tests for sir-output.

#[cfg(test)]
mod csv_tests {
    use sir_agent::HealthState;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_HEADER, SUMMARY_HEADER};
    use crate::row::{AgentSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            agent_id,
            tick,
            x:     agent_id as f64 * 1.5,
            y:     2.0,
            state: HealthState::Infected,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            susceptible:    7,
            infected:       2,
            recovered:      1,
            new_infections: 1,
            new_recoveries: 0,
            contacts:       4,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("baseline");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, SNAPSHOT_HEADER);
        assert_eq!(headers, ["agent_id", "tick", "x", "y", "state"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, SUMMARY_HEADER);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "0"); // agent_id
        assert_eq!(&read_rows[0][1], "5"); // tick
        assert_eq!(&read_rows[1][2], "1.500");
        assert_eq!(&read_rows[2][4], "infected");
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        let fields: Vec<&str> = read_rows[0].iter().collect();
        assert_eq!(fields, ["3", "7", "2", "1", "1", "0", "4"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use sir_core::SimConfig;
    use sir_sim::SimBuilder;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::{AgentSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn config(total_ticks: u64, output_interval_ticks: u64) -> SimConfig {
        SimConfig {
            population_size:       3,
            width:                 50.0,
            height:                50.0,
            max_speed:             1.0,
            agent_radius:          1.0,
            infection_radius:      5.0,
            infection_probability: 0.5,
            recovery_ticks:        4,
            total_ticks,
            seed:                  1,
            output_interval_ticks,
            interventions:         Vec::new(),
        }
    }

    /// Fails every summary write with a distinct message.
    #[derive(Default)]
    struct FailingWriter {
        attempts: usize,
    }

    impl OutputWriter for FailingWriter {
        fn write_snapshots(&mut self, _rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }

        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.attempts += 1;
            Err(io::Error::other(format!("write {}", self.attempts)).into())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn integration_csv() {
        let mut sim = SimBuilder::new(config(6, 2)).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 2 → snapshots at ticks 0, 2, 4, 6 (4 × 3 agents)
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 12, "expected 4 snapshots × 3 agents, got {}", rows.len());

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[5][0], "6");
        for row in &rows {
            let total: u64 = (1..=3).map(|i| row[i].parse::<u64>().unwrap()).sum();
            assert_eq!(total, 3);
        }
    }

    #[test]
    fn keeps_first_error() {
        let mut sim = SimBuilder::new(config(3, 0)).build().unwrap();
        let mut obs = SimOutputObserver::new(FailingWriter::default());
        sim.run(&mut obs).unwrap();

        match obs.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.to_string(), "write 1"),
            other => panic!("expected the first I/O error, got {other:?}"),
        }
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().attempts, 3);
    }
}
