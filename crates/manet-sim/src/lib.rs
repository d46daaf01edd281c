//! `manet-sim` — the simulation kernel.
//!
//! # Event loop
//!
//! ```text
//! loop:
//!   ① Pop the earliest event at or before stop_time
//!      (FIFO among simultaneous events — deterministic replay).
//!   ② Advance the clock to its firing time.
//!   ③ Dispatch:
//!        Step(node)  → run one mobility transition; reschedule its next one.
//!        Sample      → hand the observer a read-only engine snapshot;
//!                      reschedule one sample interval later.
//!   ④ Stop when the next event would pass stop_time (clock pinned to
//!      stop_time) or the queue drains.
//! ```
//!
//! Execution is single-threaded cooperative: exactly one event handler runs
//! at a time, to completion, so no node state is ever mutated concurrently
//! and no locking exists anywhere in the core.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use manet_sim::{NoopObserver, SimBuilder, SimConfig};
//!
//! let mut sim = SimBuilder::new(config, model_config).build()?;
//! let outcome = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::{SimBuilder, SimConfig};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunOutcome, Sim};
