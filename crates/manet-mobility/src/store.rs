//! `NodeStore` — SoA storage for per-node mobility state.

use manet_core::{NodeId, NodeRng, SimTime, Vector3};

use crate::{Kinematics, ModelConfig, ModelState, WaypointPhase};

/// Parallel arrays of per-node state, all indexed by `NodeId`.
///
/// Kinematics, model state, and RNGs live in separate `Vec`s so the engine
/// can split-borrow them (a stepper needs `&mut` to one node's kinematics,
/// state, and RNG simultaneously while the config stays shared).
pub struct NodeStore {
    /// Position/velocity reference points, indexed by `NodeId`.
    pub kinematics: Vec<Kinematics>,

    /// Per-node dynamic model state, indexed by `NodeId`.
    pub states: Vec<ModelState>,

    /// Per-node deterministic RNG streams, indexed by `NodeId`.
    pub rngs: Vec<NodeRng>,

    /// Node count (all three vectors keep exactly this length).
    pub count: usize,
}

impl NodeStore {
    /// Build a store of `count` nodes at rest at the origin, with model
    /// state zeroed for the configured variant and one RNG stream per node
    /// derived from `seed`.
    ///
    /// Positions and real initial model state come later, from
    /// `MobilityEngine::place` and `init_node`.
    pub fn new(count: usize, seed: u64, config: &ModelConfig) -> Self {
        let blank = match config {
            ModelConfig::GaussMarkov(_) => ModelState::GaussMarkov {
                speed:       0.0,
                direction:   0.0,
                pitch:       0.0,
                next_update: SimTime::ZERO,
            },
            ModelConfig::RandomWalk(_) => ModelState::Walk { leg_remaining: SimTime::ZERO },
            ModelConfig::Waypoint(_) => ModelState::Waypoint(WaypointPhase::Paused),
        };

        Self {
            kinematics: vec![Kinematics::at_rest(Vector3::ZERO, SimTime::ZERO); count],
            states:     vec![blank; count],
            rngs:       (0..count).map(|i| NodeRng::new(seed, NodeId(i as u32))).collect(),
            count,
        }
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.count
    }
}
