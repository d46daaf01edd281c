//! Gauss-Markov 3D stepper.
//!
//! Produces a continuous, temporally correlated trajectory inside a 3D box.
//! On a fixed `time_step` grid the three kinematic scalars (speed, azimuth
//! direction, pitch) are pulled toward a freshly drawn mean and perturbed:
//!
//! ```text
//! next = α·cur + (1−α)·mean_draw + √(1−α²)·perturbation
//! ```
//!
//! With `α = 1` both the mean and perturbation coefficients are exactly
//! zero, so the scalars — and hence the velocity vector — stay constant for
//! the whole run.  With `α = 0` the process is memoryless.
//!
//! Wall crossings fire as their own events ahead of the grid event they
//! preempt: the node snaps onto the face, the velocity component on each
//! contacted axis inverts, and the scalar-update grid carries on unshifted.
//! Interpolated position queries between events therefore never leave the
//! box.

use manet_core::{Box3, NodeRng, SimTime, Vector3};

use crate::{GaussMarkovParams, Kinematics};

/// Base tolerance for deciding a node is "at" a wall.  Event times round to
/// whole nanoseconds, so the contact point can land short of the face by up
/// to a nanosecond of travel; the tolerance scales with speed to cover that
/// for arbitrarily fast movers.
const WALL_EPS: f64 = 1e-6;

fn contact_tolerance(kin: &Kinematics) -> f64 {
    WALL_EPS + kin.velocity.length() * 1e-9
}

/// Draw the initial scalar state from the mean variates, set the node in
/// motion, and report the first event time.
pub(crate) fn init(
    params:      &GaussMarkovParams,
    kin:         &mut Kinematics,
    speed:       &mut f64,
    direction:   &mut f64,
    pitch:       &mut f64,
    next_update: &mut SimTime,
    rng:         &mut NodeRng,
    now:         SimTime,
) -> SimTime {
    kin.advance_to(now);
    *speed     = params.mean_speed.sample(rng.inner());
    *direction = params.mean_direction.sample(rng.inner());
    *pitch     = params.mean_pitch.sample(rng.inner());
    kin.velocity = Vector3::from_spherical(*speed, *direction, *pitch);
    *next_update = now + params.time_step;
    next_event(&params.bounds, kin, *next_update)
}

/// One event: a wall contact (reflect, leave the grid alone), a grid update
/// (autoregressive scalar pull), or both at once.  Reports the next event
/// time.
pub(crate) fn step(
    params:      &GaussMarkovParams,
    kin:         &mut Kinematics,
    speed:       &mut f64,
    direction:   &mut f64,
    pitch:       &mut f64,
    next_update: &mut SimTime,
    rng:         &mut NodeRng,
    now:         SimTime,
) -> SimTime {
    kin.advance_to(now);

    // Fold any wall contact into the kinematics first; direction and pitch
    // must track the actual motion before the autoregressive pull sees them.
    if reflect(&params.bounds, kin) {
        *direction = kin.velocity.direction();
        *pitch = kin.velocity.pitch();
    }

    if now >= *next_update {
        // Autoregressive update.  At α = 1 the mean/perturbation
        // coefficients are exactly 0.0, so the draws contribute nothing and
        // the scalars are bit-identical across updates.
        let a = params.alpha;
        let mean_w = 1.0 - a;
        let pert_w = (1.0 - a * a).sqrt();

        *speed = a * *speed
            + mean_w * params.mean_speed.sample(rng.inner())
            + pert_w * params.normal_speed.sample(rng.inner());
        *direction = a * *direction
            + mean_w * params.mean_direction.sample(rng.inner())
            + pert_w * params.normal_direction.sample(rng.inner());
        *pitch = a * *pitch
            + mean_w * params.mean_pitch.sample(rng.inner())
            + pert_w * params.normal_pitch.sample(rng.inner());

        kin.velocity = Vector3::from_spherical(*speed, *direction, *pitch);
        *next_update = now + params.time_step;
    }

    next_event(&params.bounds, kin, *next_update)
}

/// Invert the velocity component on each face the node is touching while
/// moving outward and snap the position back inside.  Returns whether any
/// component was inverted.
fn reflect(bounds: &Box3, kin: &mut Kinematics) -> bool {
    let tol = contact_tolerance(kin);
    let p = kin.position;
    let mut v = kin.velocity;
    let mut hit = false;

    if (p.x <= bounds.x_min + tol && v.x < 0.0) || (p.x >= bounds.x_max - tol && v.x > 0.0) {
        v.x = -v.x;
        hit = true;
    }
    if (p.y <= bounds.y_min + tol && v.y < 0.0) || (p.y >= bounds.y_max - tol && v.y > 0.0) {
        v.y = -v.y;
        hit = true;
    }
    if (p.z <= bounds.z_min + tol && v.z < 0.0) || (p.z >= bounds.z_max - tol && v.z > 0.0) {
        v.z = -v.z;
        hit = true;
    }

    if hit {
        kin.position = bounds.clamp(p);
        kin.velocity = v;
    }
    hit
}

/// The next event on the current ray: the grid update, or the first wall
/// crossing if that comes sooner.
fn next_event(bounds: &Box3, kin: &Kinematics, next_update: SimTime) -> SimTime {
    let now = kin.updated_at;
    match time_to_wall(bounds, kin) {
        Some(dt) => (now + dt).min(next_update),
        None => next_update,
    }
}

/// Time until the straight-line path first reaches a face, or `None` if the
/// current velocity never gets there.
fn time_to_wall(bounds: &Box3, kin: &Kinematics) -> Option<SimTime> {
    let p = kin.position;
    let v = kin.velocity;

    let mut t = f64::INFINITY;
    if v.x > 0.0 {
        t = t.min((bounds.x_max - p.x) / v.x);
    } else if v.x < 0.0 {
        t = t.min((bounds.x_min - p.x) / v.x);
    }
    if v.y > 0.0 {
        t = t.min((bounds.y_max - p.y) / v.y);
    } else if v.y < 0.0 {
        t = t.min((bounds.y_min - p.y) / v.y);
    }
    if v.z > 0.0 {
        t = t.min((bounds.z_max - p.z) / v.z);
    } else if v.z < 0.0 {
        t = t.min((bounds.z_min - p.z) / v.z);
    }

    t.is_finite().then(|| SimTime::from_secs(t))
}
