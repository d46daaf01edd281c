//! Model parameter records and the closed model-selection enum.
//!
//! Every scenario picks exactly one model for its node population.  The
//! choice is a tagged enum resolved once at construction — never a string
//! lookup, never re-dispatched per step — and each variant carries the full
//! explicit parameter record for its model.
//!
//! `ModelConfig::validate` is the single gate for configuration errors: it
//! runs before any node is placed or any event scheduled, so a run either
//! starts with a well-formed model or not at all.

use manet_core::{Box3, CoreError, CoreResult, Rect, SimTime, Variate};

use crate::RandomBoxAllocator;

// ── GaussMarkov ───────────────────────────────────────────────────────────────

/// Parameters of the Gauss-Markov 3D model.
///
/// The three kinematic scalars (speed, direction, pitch) each follow the
/// autoregressive rule
///
/// ```text
/// next = α·cur + (1−α)·mean_draw + √(1−α²)·perturbation
/// ```
///
/// where `mean_draw` comes from the `mean_*` variate (the long-run target is
/// itself random, giving heterogeneous asymptotic behavior per node) and
/// `perturbation` from the `normal_*` variate.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussMarkovParams {
    /// Region the trajectory reflects off.
    pub bounds: Box3,
    /// Fixed re-evaluation interval.  Must be > 0.
    pub time_step: SimTime,
    /// Memory coefficient in `[0, 1]`.  1 = fully deterministic (scalars
    /// frozen), 0 = memoryless.
    pub alpha: f64,
    pub mean_speed:     Variate,
    pub mean_direction: Variate,
    pub mean_pitch:     Variate,
    pub normal_speed:     Variate,
    pub normal_direction: Variate,
    pub normal_pitch:     Variate,
}

// ── RandomWalk ────────────────────────────────────────────────────────────────

/// When a random-walk leg's budget runs out and a fresh heading is drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WalkMode {
    /// Re-pick after travelling this many metres.
    Distance(f64),
    /// Re-pick after this much travel time.
    Time(SimTime),
}

impl WalkMode {
    /// Duration of one full leg at `speed` m/s.
    #[inline]
    pub fn leg_duration(&self, speed: f64) -> SimTime {
        match *self {
            WalkMode::Distance(d) => SimTime::from_secs(d / speed),
            WalkMode::Time(t) => t,
        }
    }
}

/// Parameters of the bounded random-walk 2D model.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomWalkParams {
    pub bounds: Rect,
    pub mode:   WalkMode,
    /// Speed of each leg.  Every possible draw must be > 0.
    pub speed: Variate,
    /// Heading of each leg, radians.  Scenarios normally leave this at the
    /// default Uniform[0, 2π).
    pub heading: Variate,
}

impl RandomWalkParams {
    /// Walk with the conventional uniform heading over the full circle.
    pub fn new(bounds: Rect, mode: WalkMode, speed: Variate) -> Self {
        Self {
            bounds,
            mode,
            speed,
            heading: Variate::Uniform { min: 0.0, max: std::f64::consts::TAU },
        }
    }
}

// ── Waypoint ─────────────────────────────────────────────────────────────────

/// Parameters of the random-waypoint model.
///
/// No bounding region appears here: destinations come from `destinations`,
/// so the trajectory is confined to that allocator's region by construction
/// and never needs reflection.
#[derive(Clone, Debug, PartialEq)]
pub struct WaypointParams {
    /// Speed of each traverse.  Every possible draw must be > 0.
    pub speed: Variate,
    /// Pause length at each destination.
    pub pause: Variate,
    /// Source of destinations (and of the implied bounds).
    pub destinations: RandomBoxAllocator,
}

// ── ModelConfig ───────────────────────────────────────────────────────────────

/// The mobility model used by a scenario's node population.
#[derive(Clone, Debug, PartialEq)]
pub enum ModelConfig {
    GaussMarkov(GaussMarkovParams),
    RandomWalk(RandomWalkParams),
    Waypoint(WaypointParams),
}

impl ModelConfig {
    /// Validate every parameter.  Any failure aborts setup before the
    /// simulation produces partial-run state.
    pub fn validate(&self) -> CoreResult<()> {
        match self {
            ModelConfig::GaussMarkov(p) => {
                if !(0.0..=1.0).contains(&p.alpha) {
                    return Err(CoreError::Config(format!(
                        "gauss-markov alpha {} outside [0, 1]",
                        p.alpha
                    )));
                }
                if p.time_step.is_zero() {
                    return Err(CoreError::Config("gauss-markov time_step must be > 0".into()));
                }
                p.mean_speed.validate("mean speed")?;
                p.mean_direction.validate("mean direction")?;
                p.mean_pitch.validate("mean pitch")?;
                p.normal_speed.validate("speed perturbation")?;
                p.normal_direction.validate("direction perturbation")?;
                p.normal_pitch.validate("pitch perturbation")?;
            }

            ModelConfig::RandomWalk(p) => {
                match p.mode {
                    WalkMode::Distance(d) if !(d > 0.0) => {
                        return Err(CoreError::Config(format!(
                            "random-walk distance bound {d} must be > 0"
                        )));
                    }
                    WalkMode::Time(t) if t.is_zero() => {
                        return Err(CoreError::Config("random-walk time bound must be > 0".into()));
                    }
                    _ => {}
                }
                p.heading.validate("heading")?;
                require_positive_speed(&p.speed)?;
            }

            ModelConfig::Waypoint(p) => {
                p.pause.validate("pause")?;
                // A negative draw would otherwise saturate to a zero-length
                // pause, silently changing the model.
                if p.pause.lower_bound() < 0.0 {
                    return Err(CoreError::Config(format!(
                        "pause variate {:?} can draw negative durations",
                        p.pause
                    )));
                }
                p.destinations.validate()?;
                require_positive_speed(&p.speed)?;
            }
        }
        Ok(())
    }
}

/// Speed variates must be unable to produce a draw ≤ 0 — a zero speed makes
/// travel time undefined, and that is a configuration defect, not something
/// to paper over mid-run.
fn require_positive_speed(speed: &Variate) -> CoreResult<()> {
    speed.validate("speed")?;
    if speed.lower_bound() <= 0.0 {
        return Err(CoreError::Config(format!(
            "speed variate {speed:?} can draw values <= 0"
        )));
    }
    Ok(())
}
