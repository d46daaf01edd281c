//! Error types for manet-event.

use manet_core::SimTime;
use thiserror::Error;

/// Errors raised by [`EventQueue`][crate::EventQueue].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// An event was scheduled earlier than the current clock.  This is a
    /// defect in the caller's step logic, not a recoverable condition:
    /// silently reordering or dropping the event would corrupt the
    /// deterministic-replay guarantee.
    #[error("cannot schedule at {requested} — clock is already at {now}")]
    PastTime { requested: SimTime, now: SimTime },
}

/// Alias for `Result<T, ScheduleError>`.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
