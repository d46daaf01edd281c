//! Parquet output backend (feature `parquet`).
//!
//! Creates two files in the configured output directory:
//! - `mobility_trace.parquet`
//! - `run_summary.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float64Builder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::TraceWriter;
use crate::{OutputResult, RunSummaryRow, TraceRow};

fn trace_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("node_id",   DataType::UInt32,  false),
        Field::new("time_secs", DataType::Float64, false),
        Field::new("x",         DataType::Float64, false),
        Field::new("y",         DataType::Float64, false),
        Field::new("z",         DataType::Float64, false),
        Field::new("vx",        DataType::Float64, false),
        Field::new("vy",        DataType::Float64, false),
        Field::new("vz",        DataType::Float64, false),
    ]))
}

fn summary_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("nodes",           DataType::UInt64,  false),
        Field::new("steps",           DataType::UInt64,  false),
        Field::new("samples",         DataType::UInt64,  false),
        Field::new("final_time_secs", DataType::Float64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes simulation output to two Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    traces:       Option<ArrowWriter<File>>,
    summaries:    Option<ArrowWriter<File>>,
    trace_schema: Arc<Schema>,
    summ_schema:  Arc<Schema>,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let trace_schema = trace_schema();
        let summ_schema = summary_schema();

        let trace_file = File::create(dir.join("mobility_trace.parquet"))?;
        let traces = ArrowWriter::try_new(
            trace_file,
            Arc::clone(&trace_schema),
            Some(snappy_props()),
        )?;

        let summ_file = File::create(dir.join("run_summary.parquet"))?;
        let summaries = ArrowWriter::try_new(
            summ_file,
            Arc::clone(&summ_schema),
            Some(snappy_props()),
        )?;

        Ok(Self {
            traces: Some(traces),
            summaries: Some(summaries),
            trace_schema,
            summ_schema,
        })
    }
}

impl TraceWriter for ParquetWriter {
    fn write_trace(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.traces.as_mut() else {
            return Ok(());
        };

        let mut node_ids = UInt32Builder::new();
        let mut times    = Float64Builder::new();
        let mut xs       = Float64Builder::new();
        let mut ys       = Float64Builder::new();
        let mut zs       = Float64Builder::new();
        let mut vxs      = Float64Builder::new();
        let mut vys      = Float64Builder::new();
        let mut vzs      = Float64Builder::new();

        for row in rows {
            node_ids.append_value(row.node_id);
            times.append_value(row.time_secs);
            xs.append_value(row.x);
            ys.append_value(row.y);
            zs.append_value(row.z);
            vxs.append_value(row.vx);
            vys.append_value(row.vy);
            vzs.append_value(row.vz);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.trace_schema),
            vec![
                Arc::new(node_ids.finish()),
                Arc::new(times.finish()),
                Arc::new(xs.finish()),
                Arc::new(ys.finish()),
                Arc::new(zs.finish()),
                Arc::new(vxs.finish()),
                Arc::new(vys.finish()),
                Arc::new(vzs.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        let Some(writer) = self.summaries.as_mut() else {
            return Ok(());
        };

        let mut nodes   = UInt64Builder::new();
        let mut steps   = UInt64Builder::new();
        let mut samples = UInt64Builder::new();
        let mut finals  = Float64Builder::new();

        nodes.append_value(row.nodes);
        steps.append_value(row.steps);
        samples.append_value(row.samples);
        finals.append_value(row.final_time_secs);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.summ_schema),
            vec![
                Arc::new(nodes.finish()),
                Arc::new(steps.finish()),
                Arc::new(samples.finish()),
                Arc::new(finals.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.traces.take() {
            w.close()?;
        }
        if let Some(w) = self.summaries.take() {
            w.close()?;
        }
        Ok(())
    }
}
