use manet_event::ScheduleError;
use manet_mobility::MobilityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),

    /// An event was scheduled into the past — a defect in step logic.  The
    /// run aborts rather than skipping the event, which would silently break
    /// deterministic replay.
    #[error("event scheduling error: {0}")]
    Schedule(#[from] ScheduleError),
}

pub type SimResult<T> = Result<T, SimError>;
