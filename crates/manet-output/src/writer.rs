//! The `TraceWriter` trait implemented by all backend writers.

use crate::{OutputResult, RunSummaryRow, TraceRow};

/// Trait implemented by CSV, SQLite, and Parquet writers.
///
/// Backends report failures through `OutputResult`; the driving
/// [`TraceObserver`][crate::TraceObserver] stores the first failure and
/// exposes it after the run via `take_error`.
pub trait TraceWriter {
    /// Write a batch of trace rows (one sample instant, all nodes).
    fn write_trace(&mut self, rows: &[TraceRow]) -> OutputResult<()>;

    /// Write the end-of-run summary row.
    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
