//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `mobility_trace.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, RunSummaryRow, TraceRow};
use crate::writer::TraceWriter;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    traces:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut traces = Writer::from_path(dir.join("mobility_trace.csv"))?;
        traces.write_record(["node_id", "time_secs", "x", "y", "z", "vx", "vy", "vz"])?;

        let mut summaries = Writer::from_path(dir.join("run_summary.csv"))?;
        summaries.write_record(["nodes", "steps", "samples", "final_time_secs"])?;

        Ok(Self {
            traces,
            summaries,
            finished: false,
        })
    }
}

impl TraceWriter for CsvWriter {
    fn write_trace(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        for row in rows {
            self.traces.write_record(&[
                row.node_id.to_string(),
                row.time_secs.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.z.to_string(),
                row.vx.to_string(),
                row.vy.to_string(),
                row.vz.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.nodes.to_string(),
            row.steps.to_string(),
            row.samples.to_string(),
            row.final_time_secs.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.traces.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
