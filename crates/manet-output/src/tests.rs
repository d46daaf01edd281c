//! Integration tests for manet-output.

fn trace_row(node_id: u32, time_secs: f64) -> crate::TraceRow {
    crate::TraceRow {
        node_id,
        time_secs,
        x: node_id as f64 * 10.0,
        y: 1.5,
        z: 0.0,
        vx: 2.0,
        vy: 0.0,
        vz: 0.0,
    }
}

fn summary_row() -> crate::RunSummaryRow {
    crate::RunSummaryRow { nodes: 4, steps: 100, samples: 6, final_time_secs: 5.0 }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::writer::TraceWriter;

    use super::{summary_row, trace_row};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("mobility_trace.csv").exists());
        assert!(dir.path().join("run_summary.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("mobility_trace.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["node_id", "time_secs", "x", "y", "z", "vx", "vy", "vz"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("run_summary.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["nodes", "steps", "samples", "final_time_secs"]);
    }

    #[test]
    fn csv_trace_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![trace_row(0, 1.0), trace_row(1, 1.0), trace_row(2, 1.0)];
        w.write_trace(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("mobility_trace.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "0"); // node_id
        assert_eq!(&read_rows[0][1], "1"); // time_secs
        assert_eq!(&read_rows[1][2], "10"); // x = node_id * 10
        assert_eq!(&read_rows[2][0], "2");
    }

    #[test]
    fn csv_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&summary_row()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("run_summary.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "4");   // nodes
        assert_eq!(&read_rows[0][1], "100"); // steps
        assert_eq!(&read_rows[0][2], "6");   // samples
        assert_eq!(&read_rows[0][3], "5");   // final_time_secs
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_trace_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trace(&[]).unwrap(); // should return Ok(())
    }

    #[test]
    fn integration_csv() {
        use manet_core::{Rect, SimTime, Variate};
        use manet_mobility::{ModelConfig, RandomWalkParams, WalkMode};
        use manet_sim::{SimBuilder, SimConfig};

        use crate::observer::TraceObserver;

        let bounds = Rect::new(0.0, 100.0, 0.0, 100.0).unwrap();
        let model = ModelConfig::RandomWalk(RandomWalkParams::new(
            bounds,
            WalkMode::Time(SimTime::from_secs(2.0)),
            Variate::Constant(2.0),
        ));
        let config = SimConfig {
            node_count:      4,
            stop_time:       SimTime::from_secs(5.0),
            seed:            1,
            sample_interval: SimTime::from_secs(1.0),
        };

        let mut sim = SimBuilder::new(config, model).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = TraceObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // Samples fire at t = 0, 1, 2, 3, 4, 5 → 6 samples × 4 nodes = 24 rows.
        let mut rdr = csv::Reader::from_path(dir.path().join("mobility_trace.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 24, "expected 6 samples × 4 nodes = 24 trace rows, got {}", rows.len());

        let mut rdr2 = csv::Reader::from_path(dir.path().join("run_summary.csv")).unwrap();
        let summary: Vec<_> = rdr2.records().map(|r| r.unwrap()).collect();
        assert_eq!(summary.len(), 1);
        assert_eq!(&summary[0][0], "4"); // nodes
        assert_eq!(&summary[0][3], "5"); // final_time_secs
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::sqlite::SqliteWriter;
    use crate::writer::TraceWriter;

    use super::{summary_row, trace_row};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_trace_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let rows = vec![trace_row(0, 0.5), trace_row(1, 0.5), trace_row(2, 0.5)];
        w.write_trace(&rows).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM mobility_trace", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_position_stored_as_real() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_trace(&[trace_row(2, 1.5)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (x, t): (f64, f64) = conn.query_row(
            "SELECT x, time_secs FROM mobility_trace WHERE node_id = 2",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        ).unwrap();
        assert_eq!(x, 20.0);
        assert_eq!(t, 1.5);
    }

    #[test]
    fn sqlite_run_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_summary(&summary_row()).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (nodes, steps, samples, final_secs): (i64, i64, i64, f64) = conn.query_row(
            "SELECT nodes, steps, samples, final_time_secs FROM run_summary",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
        ).unwrap();
        assert_eq!(nodes, 4);
        assert_eq!(steps, 100);
        assert_eq!(samples, 6);
        assert_eq!(final_secs, 5.0);
    }
}

// ── Parquet tests ─────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parquet"))]
mod parquet_tests {
    use tempfile::TempDir;

    use arrow::datatypes::DataType;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    use crate::parquet::ParquetWriter;
    use crate::writer::TraceWriter;

    use super::trace_row;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn parquet_files_created() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert!(dir.path().join("mobility_trace.parquet").exists());
        assert!(dir.path().join("run_summary.parquet").exists());
    }

    #[test]
    fn parquet_trace_round_trip() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        let rows = vec![trace_row(0, 2.0), trace_row(1, 2.0)];
        w.write_trace(&rows).unwrap();
        w.finish().unwrap();

        let file = std::fs::File::open(dir.path().join("mobility_trace.parquet")).unwrap();
        let builder = ParquetRecordBatchReaderBuilder::try_new(file).unwrap();
        let schema = builder.schema().clone();
        let reader = builder.build().unwrap();

        let batches: Vec<_> = reader.map(|b| b.unwrap()).collect();
        let total_rows: usize = batches.iter().map(|b| b.num_rows()).sum();
        assert_eq!(total_rows, 2, "expected 2 rows");

        // Check schema field names
        let field_names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(field_names, ["node_id", "time_secs", "x", "y", "z", "vx", "vy", "vz"]);
    }

    #[test]
    fn parquet_float_column_type() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.write_trace(&[trace_row(0, 0.0)]).unwrap();
        w.finish().unwrap();

        let file = std::fs::File::open(dir.path().join("mobility_trace.parquet")).unwrap();
        let builder = ParquetRecordBatchReaderBuilder::try_new(file).unwrap();
        let schema = builder.schema().clone();

        let x_field = schema.field_with_name("x").unwrap();
        assert_eq!(*x_field.data_type(), DataType::Float64);
        let id_field = schema.field_with_name("node_id").unwrap();
        assert_eq!(*id_field.data_type(), DataType::UInt32);
    }

    #[test]
    fn parquet_finish_required() {
        // A Parquet file whose writer was NOT closed is invalid (missing footer).
        // We verify that a dropped-without-finish writer produces an unreadable file.
        let dir = tmp();
        {
            let mut w = ParquetWriter::new(dir.path()).unwrap();
            w.write_trace(&[trace_row(0, 0.0)]).unwrap();
            // Drop without calling finish() — ArrowWriter's Drop will NOT write the footer.
        }

        let file = std::fs::File::open(dir.path().join("mobility_trace.parquet")).unwrap();
        let result = ParquetRecordBatchReaderBuilder::try_new(file);
        assert!(result.is_err(), "file without Parquet footer should fail to open");
    }
}
