//! Plain data row types written by output backends.

/// One node's kinematic state at a sample instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRow {
    pub node_id:   u32,
    pub time_secs: f64,
    pub x:  f64,
    pub y:  f64,
    pub z:  f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
}

/// Summary statistics for one completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummaryRow {
    pub nodes:           u64,
    pub steps:           u64,
    pub samples:         u64,
    pub final_time_secs: f64,
}
