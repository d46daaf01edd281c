//! The `Sim` struct and its event loop.

use manet_core::{NodeId, SimTime};
use manet_event::{EventHandle, EventQueue};
use manet_mobility::MobilityEngine;

use crate::{SimConfig, SimObserver, SimResult};

// ── Events ────────────────────────────────────────────────────────────────────

/// What a queued event means to the kernel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SimEvent {
    /// Run one mobility transition for this node.
    Step(NodeId),
    /// Hand the observer a read-only snapshot of all node kinematics.
    Sample,
}

/// How a completed run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The clock reached the configured stop time with events still pending.
    ReachedStop,
    /// The event queue drained before the stop time (e.g. every node was
    /// retired and sampling was disabled).  `at` is where the clock stopped.
    QueueDrained { at: SimTime },
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation kernel: owns the event queue, the mobility engine, and the
/// run/stop lifecycle.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (stop time, seed, sample interval, …).
    pub config: SimConfig,

    /// The mobility engine — all node kinematics and model state.
    pub engine: MobilityEngine,

    /// The event queue; also owns the simulation clock.
    pub(crate) events: EventQueue<SimEvent>,

    /// Each node's pending step event, so retirement can cancel it before
    /// it touches removed state.  Indexed by `NodeId`.
    pub(crate) pending: Vec<Option<EventHandle>>,

    /// Retired nodes take no further steps.  Indexed by `NodeId`.
    pub(crate) retired: Vec<bool>,

    /// Mobility transitions executed so far (diagnostics).
    pub(crate) steps_executed: u64,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Current simulation time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.events.now()
    }

    /// Mobility transitions executed so far.
    #[inline]
    pub fn steps_executed(&self) -> u64 {
        self.steps_executed
    }

    /// Run the simulation to `config.stop_time`.
    ///
    /// Calls observer hooks throughout; use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    /// Any mobility or scheduling error aborts the run immediately.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunOutcome> {
        let stop = self.config.stop_time;
        observer.on_start(&self.engine);

        let outcome = loop {
            let Some((_, event)) = self.events.pop_next_until(stop) else {
                if self.events.is_empty() {
                    break RunOutcome::QueueDrained { at: self.events.now() };
                }
                // Remaining events all fire after the stop time: the run is
                // over, pin the clock to exactly the stop time.
                self.events.advance_to(stop);
                break RunOutcome::ReachedStop;
            };

            let now = self.events.now();
            match event {
                SimEvent::Step(node) => {
                    self.steps_executed += 1;
                    let next = self.engine.step(node, now)?;
                    self.pending[node.index()] =
                        Some(self.events.schedule(next, SimEvent::Step(node))?);
                    observer.on_step(now, node);
                }
                SimEvent::Sample => {
                    observer.on_sample(now, &self.engine);
                    if let Some(next) = now.checked_add(self.config.sample_interval)
                        && next <= stop
                    {
                        self.events.schedule(next, SimEvent::Sample)?;
                    }
                }
            }
        };

        observer.on_sim_end(self.events.now());
        Ok(outcome)
    }

    /// Remove `node` from the run: its pending step event is cancelled so no
    /// future callback touches its state.  Retired nodes keep their last
    /// position and zero velocity for the remainder of the run.
    ///
    /// Idempotent — retiring an already-retired node is a no-op.
    pub fn retire_node(&mut self, node: NodeId) {
        if !self.engine.store.contains(node) || self.retired[node.index()] {
            return;
        }
        self.retired[node.index()] = true;
        if let Some(handle) = self.pending[node.index()].take() {
            self.events.cancel(handle);
        }
        let now = self.events.now();
        let kin = &mut self.engine.store.kinematics[node.index()];
        kin.advance_to(now);
        kin.velocity = manet_core::Vector3::ZERO;
    }

    /// Number of nodes still active (not retired).
    pub fn active_nodes(&self) -> usize {
        self.retired.iter().filter(|&&r| !r).count()
    }
}
