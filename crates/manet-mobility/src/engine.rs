//! `MobilityEngine` — dispatch between the configured model and per-node
//! state, plus the kinematics queries exposed to external collaborators.

use manet_core::{NodeId, SimTime, Vector3};

use crate::{
    Kinematics, MobilityError, MobilityResult, ModelConfig, ModelState, NodeStore, gauss_markov,
    random_walk, waypoint,
};

/// Owns the model configuration (shared across nodes) and the per-node
/// store.  The kernel drives it with `step`; everything radio- or
/// routing-related reads positions and velocities through `position` /
/// `velocity`.
pub struct MobilityEngine {
    /// The scenario's mobility model.  Fixed for the lifetime of the run.
    pub config: ModelConfig,

    /// All per-node kinematics, model state, and RNG streams.
    pub store: NodeStore,
}

impl MobilityEngine {
    /// Validate `config` and build a store of `node_count` nodes whose RNG
    /// streams derive from `seed`.
    pub fn new(config: ModelConfig, node_count: usize, seed: u64) -> MobilityResult<Self> {
        config.validate()?;
        let store = NodeStore::new(node_count, seed, &config);
        Ok(Self { config, store })
    }

    /// Set `node`'s t=0 position (initial placement, no motion implied).
    pub fn place(&mut self, node: NodeId, position: Vector3, now: SimTime) -> MobilityResult<()> {
        if !self.store.contains(node) {
            return Err(MobilityError::UnknownNode(node));
        }
        self.store.kinematics[node.index()] = Kinematics::at_rest(position, now);
        Ok(())
    }

    /// Draw `node`'s initial model state and return its first event time.
    pub fn init_node(&mut self, node: NodeId, now: SimTime) -> MobilityResult<SimTime> {
        if !self.store.contains(node) {
            return Err(MobilityError::UnknownNode(node));
        }
        let i = node.index();
        let NodeStore { kinematics, states, rngs, .. } = &mut self.store;
        let (kin, rng) = (&mut kinematics[i], &mut rngs[i]);

        match (&self.config, &mut states[i]) {
            (
                ModelConfig::GaussMarkov(p),
                ModelState::GaussMarkov { speed, direction, pitch, next_update },
            ) => Ok(gauss_markov::init(p, kin, speed, direction, pitch, next_update, rng, now)),
            (ModelConfig::RandomWalk(p), ModelState::Walk { leg_remaining }) => {
                Ok(random_walk::init(p, kin, leg_remaining, rng, now))
            }
            (ModelConfig::Waypoint(p), ModelState::Waypoint(phase)) => {
                waypoint::init(p, node, kin, phase, rng, now)
            }
            _ => Err(MobilityError::InconsistentState(node)),
        }
    }

    /// Execute one model transition for `node` at `now` and return the time
    /// of its next transition.  Called only from the kernel's event loop.
    pub fn step(&mut self, node: NodeId, now: SimTime) -> MobilityResult<SimTime> {
        if !self.store.contains(node) {
            return Err(MobilityError::UnknownNode(node));
        }
        let i = node.index();
        let NodeStore { kinematics, states, rngs, .. } = &mut self.store;
        let (kin, rng) = (&mut kinematics[i], &mut rngs[i]);

        match (&self.config, &mut states[i]) {
            (
                ModelConfig::GaussMarkov(p),
                ModelState::GaussMarkov { speed, direction, pitch, next_update },
            ) => Ok(gauss_markov::step(p, kin, speed, direction, pitch, next_update, rng, now)),
            (ModelConfig::RandomWalk(p), ModelState::Walk { leg_remaining }) => {
                Ok(random_walk::step(p, kin, leg_remaining, rng, now))
            }
            (ModelConfig::Waypoint(p), ModelState::Waypoint(phase)) => {
                waypoint::step(p, node, kin, phase, rng, now)
            }
            _ => Err(MobilityError::InconsistentState(node)),
        }
    }

    // ── Kinematics queries ────────────────────────────────────────────────

    /// `node`'s position at `now`, interpolated from its last transition.
    #[inline]
    pub fn position(&self, node: NodeId, now: SimTime) -> Vector3 {
        self.store.kinematics[node.index()].position_at(now)
    }

    /// `node`'s current velocity vector.
    #[inline]
    pub fn velocity(&self, node: NodeId) -> Vector3 {
        self.store.kinematics[node.index()].velocity
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.store.count
    }
}
