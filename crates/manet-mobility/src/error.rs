use manet_core::{CoreError, NodeId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    /// Malformed model parameters — raised at construction, before any
    /// simulated time advances.
    #[error(transparent)]
    Config(#[from] CoreError),

    /// A speed draw came out non-positive where motion requires speed > 0.
    /// Travel time would be undefined, so this aborts instead of guessing.
    #[error("node {0} drew a non-positive speed; motion requires speed > 0")]
    NonPositiveSpeed(NodeId),

    #[error("node {0} is out of range for this store")]
    UnknownNode(NodeId),

    /// A node's dynamic state does not match the configured model variant.
    /// Cannot happen through the public API; kept as an error rather than a
    /// panic so a corrupted store aborts the run cleanly.
    #[error("node {0} has inconsistent model state")]
    InconsistentState(NodeId),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
