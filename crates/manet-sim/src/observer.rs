//! Simulation observer trait for progress reporting and data collection.

use manet_core::{NodeId, SimTime};
use manet_mobility::MobilityEngine;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// event loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_sample(&mut self, now: SimTime, engine: &MobilityEngine) {
///         println!("{now}: {} nodes", engine.node_count());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first event fires, with the initial state.
    fn on_start(&mut self, _engine: &MobilityEngine) {}

    /// Called after each mobility transition (one node moved or re-planned).
    fn on_step(&mut self, _now: SimTime, _node: NodeId) {}

    /// Called at every sample interval with read-only access to the full
    /// engine, so output writers can record interpolated positions without
    /// the kernel knowing about any specific output format.
    fn on_sample(&mut self, _now: SimTime, _engine: &MobilityEngine) {}

    /// Called once after the run completes, with the final clock value.
    fn on_sim_end(&mut self, _final_time: SimTime) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
