//! `manet-event` — the discrete-event queue driving the simulation.
//!
//! # Design
//!
//! [`EventQueue<T>`] is a time-ordered map from `(firing time, insertion
//! sequence)` to an opaque payload.  The kernel decides what a payload
//! *means* (step this node, take a trace sample, …); the queue only
//! guarantees ordering:
//!
//! - primary key: firing time, ascending;
//! - tie-break: insertion sequence, ascending — FIFO among simultaneous
//!   events, so replay under a fixed seed is deterministic.
//!
//! The queue owns the simulation clock: popping an event advances the clock
//! to that event's time, and the clock never moves otherwise.  Scheduling
//! into the past is a programming defect and fails hard; cancelling an
//! already-fired or unknown handle is an idempotent no-op.

pub mod error;
pub mod queue;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use queue::{EventHandle, EventQueue};
