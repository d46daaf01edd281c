//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! into them via `#[from]` or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `manet-core` and a common base for sub-crates.
///
/// Everything here is a configuration defect: it is raised at construction
/// time, before any simulated time advances, and is never recovered.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{what}: interval [{min}, {max}] is empty (min must be < max)")]
    EmptyInterval {
        what: &'static str,
        min:  f64,
        max:  f64,
    },
}

/// Shorthand result type for all `manet-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
