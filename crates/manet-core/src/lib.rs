//! `manet-core` — foundational types for the `rust_manet` mobility simulator.
//!
//! This crate is a dependency of every other `manet-*` crate.  It
//! intentionally has no `manet-*` dependencies and minimal external ones
//! (only `rand`, `rand_distr`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `NodeId`                                              |
//! | [`vec`]      | `Vector3`, spherical→Cartesian velocity conversion    |
//! | [`region`]   | `Rect` (2D) and `Box3` (3D) reflecting bounds         |
//! | [`time`]     | `SimTime` (integer-nanosecond simulation time)        |
//! | [`rng`]      | `NodeRng` (per-node), `SimRng` (run-level)            |
//! | [`variate`]  | `Variate` (constant / uniform / bounded-normal draws) |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod region;
pub mod rng;
pub mod time;
pub mod variate;
pub mod vec;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::NodeId;
pub use region::{Box3, Rect};
pub use rng::{NodeRng, SimRng};
pub use time::SimTime;
pub use variate::Variate;
pub use vec::Vector3;
