//! `TraceObserver<W>` — bridges `SimObserver` to a `TraceWriter`.

use manet_core::{NodeId, SimTime};
use manet_mobility::MobilityEngine;
use manet_sim::SimObserver;

use crate::row::{RunSummaryRow, TraceRow};
use crate::writer::TraceWriter;
use crate::OutputError;

/// A [`SimObserver`] that records node positions to any [`TraceWriter`]
/// backend (CSV, SQLite, Parquet, …).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    nodes:      u64,
    steps:      u64,
    samples:    u64,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            nodes:      0,
            steps:      0,
            samples:    0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> SimObserver for TraceObserver<W> {
    fn on_start(&mut self, engine: &MobilityEngine) {
        self.nodes = engine.node_count() as u64;
    }

    fn on_step(&mut self, _now: SimTime, _node: NodeId) {
        self.steps += 1;
    }

    fn on_sample(&mut self, now: SimTime, engine: &MobilityEngine) {
        self.samples += 1;

        let rows: Vec<TraceRow> = (0..engine.node_count())
            .map(|i| {
                let node = NodeId(i as u32);
                let pos = engine.position(node, now);
                let vel = engine.velocity(node);
                TraceRow {
                    node_id:   node.0,
                    time_secs: now.as_secs_f64(),
                    x:         pos.x,
                    y:         pos.y,
                    z:         pos.z,
                    vx:        vel.x,
                    vy:        vel.y,
                    vz:        vel.z,
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_trace(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, final_time: SimTime) {
        let summary = RunSummaryRow {
            nodes:           self.nodes,
            steps:           self.steps,
            samples:         self.samples,
            final_time_secs: final_time.as_secs_f64(),
        };
        let result = self.writer.write_summary(&summary);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
