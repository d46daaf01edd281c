//! `manet-mobility` — the mobility-model state machines.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`config`]      | `ModelConfig` — closed tagged enum of model parameters    |
//! | [`state`]       | `Kinematics`, per-node `ModelState`                       |
//! | [`store`]       | `NodeStore` (SoA kinematics/state/RNG arrays)             |
//! | [`allocator`]   | `RandomBoxAllocator` — independent initial positions      |
//! | [`gauss_markov`]| Gauss-Markov 3D correlated-motion stepper                 |
//! | [`random_walk`] | Bounded random-walk 2D stepper (distance and time modes)  |
//! | [`waypoint`]    | Random-waypoint travel/pause stepper                      |
//! | [`engine`]      | `MobilityEngine` — dispatch + public kinematics queries   |
//!
//! # Design notes
//!
//! Model selection is a **closed enum**, decided once at construction.  Each
//! variant carries its own explicit parameter record, validated before any
//! simulated time advances.  Per-node dynamic state lives in `NodeStore`
//! beside the kinematics; the steppers are free functions over `(params,
//! kinematics, state, rng)` so each model's math is testable in isolation.
//!
//! Between events a node moves at constant velocity, so its position at any
//! queried time interpolates linearly from the last event.  Every model
//! keeps every node inside its bounding region at every sampled time —
//! excursions are reflected, never clipped or wrapped.

pub mod allocator;
pub mod config;
pub mod engine;
pub mod error;
pub mod gauss_markov;
pub mod random_walk;
pub mod state;
pub mod store;
pub mod waypoint;


pub use allocator::RandomBoxAllocator;
pub use config::{GaussMarkovParams, ModelConfig, RandomWalkParams, WalkMode, WaypointParams};
pub use engine::MobilityEngine;
pub use error::{MobilityError, MobilityResult};
pub use state::{Kinematics, ModelState, WaypointPhase};
pub use store::NodeStore;
