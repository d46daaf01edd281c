//! Per-node kinematic and model state.

use manet_core::{SimTime, Vector3};

// ── Kinematics ────────────────────────────────────────────────────────────────

/// The kinematic state of one node: where it was at its last event, and how
/// fast it has been moving since.
///
/// Between events every model moves its node at constant velocity, so the
/// position at any queried time is a linear interpolation.  `advance_to`
/// folds the elapsed motion into `position` before a model mutates velocity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Kinematics {
    pub position: Vector3,
    pub velocity: Vector3,
    /// Time at which `position` was last materialised.
    pub updated_at: SimTime,
}

impl Kinematics {
    /// A node at rest at `position` at time `now`.
    #[inline]
    pub fn at_rest(position: Vector3, now: SimTime) -> Self {
        Self { position, velocity: Vector3::ZERO, updated_at: now }
    }

    /// Interpolated position at `now` (constant velocity since `updated_at`).
    #[inline]
    pub fn position_at(&self, now: SimTime) -> Vector3 {
        let dt = now.saturating_sub(self.updated_at).as_secs_f64();
        self.position + self.velocity * dt
    }

    /// Integrate motion up to `now` and make it the new reference point.
    #[inline]
    pub fn advance_to(&mut self, now: SimTime) {
        self.position = self.position_at(now);
        self.updated_at = now;
    }
}

// ── ModelState ────────────────────────────────────────────────────────────────

/// Dynamic, per-node state of the configured mobility model.
///
/// The variant always matches the engine's `ModelConfig` variant; the store
/// is constructed from the config, and nothing else writes these.
#[derive(Clone, Debug, PartialEq)]
pub enum ModelState {
    /// Correlated scalar processes of the Gauss-Markov model.
    ///
    /// `next_update` is the node's fixed scalar re-evaluation grid; wall
    /// contacts fire as separate events in between and never shift it.
    GaussMarkov {
        speed:       f64,
        direction:   f64,
        pitch:       f64,
        next_update: SimTime,
    },

    /// Time left on the current random-walk leg.  In distance mode the
    /// budget is converted to time up front (speed is constant within a
    /// leg), so both modes share one representation.
    Walk { leg_remaining: SimTime },

    /// Travel/pause phase of the random-waypoint model.
    Waypoint(WaypointPhase),
}

/// Which half of the waypoint cycle a node is in.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WaypointPhase {
    /// En route to `dest`; the pending event is the arrival.
    Traveling { dest: Vector3 },
    /// Stationary; the pending event is the pause expiry.
    Paused,
}
