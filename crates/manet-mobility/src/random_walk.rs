//! Bounded random-walk 2D stepper.
//!
//! Piecewise-linear motion in a rectangle.  Each *leg* has a budget — a
//! travel distance or a travel time, per [`WalkMode`] — and two things can
//! end a pending event:
//!
//! - **budget exhausted** → draw a fresh heading and speed (re-pick);
//! - **wall reached first** → mirror the velocity component normal to the
//!   violated edge and keep travelling on the *same* budget, reduced by
//!   what was already consumed.  No new draw.
//!
//! Distance budgets are converted to time budgets up front (speed is fixed
//! within a leg), so both modes share the nanosecond-exact bookkeeping: the
//! interval between consecutive re-picks in time mode is exactly the
//! configured bound no matter how many reflections happen in between.

use manet_core::{NodeRng, Rect, SimTime, Vector3};

use crate::{Kinematics, RandomWalkParams};

/// Tolerance for deciding a node is "at" a wall.  Wall-hit times are rounded
/// to whole nanoseconds, which at m/s speeds displaces the contact point by
/// nanometres at most.
const WALL_EPS: f64 = 1e-6;

/// Draw the first leg and return the time of the first event.
pub(crate) fn init(
    params: &RandomWalkParams,
    kin:    &mut Kinematics,
    leg:    &mut SimTime,
    rng:    &mut NodeRng,
    now:    SimTime,
) -> SimTime {
    repick(params, kin, leg, rng);
    now + next_event_delay(&params.bounds, kin, *leg)
}

/// One event: either the leg budget ran out (re-pick) or a wall was reached
/// (reflect-and-continue).  Returns the next event time.
pub(crate) fn step(
    params: &RandomWalkParams,
    kin:    &mut Kinematics,
    leg:    &mut SimTime,
    rng:    &mut NodeRng,
    now:    SimTime,
) -> SimTime {
    let elapsed = now.saturating_sub(kin.updated_at);
    kin.advance_to(now);
    *leg = leg.saturating_sub(elapsed);

    if leg.is_zero() {
        // Budget exhausted first.  A simultaneous wall contact still counts
        // as a re-pick: the budget takes precedence.
        kin.position = params.bounds.clamp(kin.position);
        repick(params, kin, leg, rng);
    } else {
        reflect(&params.bounds, kin);
    }

    now + next_event_delay(&params.bounds, kin, *leg)
}

/// Draw a fresh heading and speed and reset the leg budget.
fn repick(params: &RandomWalkParams, kin: &mut Kinematics, leg: &mut SimTime, rng: &mut NodeRng) {
    let heading = params.heading.sample(rng.inner());
    let speed   = params.speed.sample(rng.inner());
    kin.velocity = Vector3::from_spherical(speed, heading, 0.0);
    *leg = params.mode.leg_duration(speed);
}

/// Mirror the velocity about the normal of each wall the node is touching
/// while moving outward, and snap the position back onto the rectangle.
fn reflect(bounds: &Rect, kin: &mut Kinematics) {
    let p = kin.position;
    let mut v = kin.velocity;
    if (p.x <= bounds.x_min + WALL_EPS && v.x < 0.0) || (p.x >= bounds.x_max - WALL_EPS && v.x > 0.0)
    {
        v.x = -v.x;
    }
    if (p.y <= bounds.y_min + WALL_EPS && v.y < 0.0) || (p.y >= bounds.y_max - WALL_EPS && v.y > 0.0)
    {
        v.y = -v.y;
    }
    kin.position = bounds.clamp(p);
    kin.velocity = v;
}

/// Time until the next event on the current leg: the budget expiry, or the
/// first wall crossing if that comes sooner.
fn next_event_delay(bounds: &Rect, kin: &Kinematics, leg: SimTime) -> SimTime {
    match time_to_wall(bounds, kin) {
        Some(wall) if wall < leg => wall,
        _ => leg,
    }
}

/// Time until the straight-line path first crosses a wall, or `None` if the
/// current velocity never reaches one.
fn time_to_wall(bounds: &Rect, kin: &Kinematics) -> Option<SimTime> {
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

    t.is_finite().then(|| SimTime::from_secs(t))
}
