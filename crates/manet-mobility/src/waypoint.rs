//! Random-waypoint stepper.
//!
//! Travel-then-pause motion: pick a destination, move toward it in a
//! straight line at a drawn speed, arrive *exactly* on it, pause for a drawn
//! duration, repeat.  States alternate strictly Traveling → Paused →
//! Traveling.  Destinations come from the configured allocator, so the
//! trajectory never leaves the allocation region and no reflection logic is
//! needed.

use manet_core::{NodeId, NodeRng, SimTime, Vector3};

use crate::{Kinematics, MobilityError, MobilityResult, WaypointParams, WaypointPhase};

/// Start the node on its first traverse.  Returns the arrival time.
pub(crate) fn init(
    params: &WaypointParams,
    node:   NodeId,
    kin:    &mut Kinematics,
    phase:  &mut WaypointPhase,
    rng:    &mut NodeRng,
    now:    SimTime,
) -> MobilityResult<SimTime> {
    begin_travel(params, node, kin, phase, rng, now)
}

/// One transition of the travel/pause state machine.  Returns the next
/// event time (pause expiry or arrival).
pub(crate) fn step(
    params: &WaypointParams,
    node:   NodeId,
    kin:    &mut Kinematics,
    phase:  &mut WaypointPhase,
    rng:    &mut NodeRng,
    now:    SimTime,
) -> MobilityResult<SimTime> {
    match *phase {
        WaypointPhase::Traveling { dest } => {
            // Arrival.  Land exactly on the drawn destination rather than on
            // the integrated position, so float error cannot accumulate
            // across traverses.
            kin.position = dest;
            kin.velocity = Vector3::ZERO;
            kin.updated_at = now;
            *phase = WaypointPhase::Paused;

            Ok(now + SimTime::from_secs(params.pause.sample(rng.inner())))
        }

        WaypointPhase::Paused => begin_travel(params, node, kin, phase, rng, now),
    }
}

/// Draw a destination and speed and head out.  Returns the arrival time.
fn begin_travel(
    params: &WaypointParams,
    node:   NodeId,
    kin:    &mut Kinematics,
    phase:  &mut WaypointPhase,
    rng:    &mut NodeRng,
    now:    SimTime,
) -> MobilityResult<SimTime> {
    let dest  = params.destinations.sample(rng.inner());
    let speed = params.speed.sample(rng.inner());
    if speed <= 0.0 {
        // Config validation rejects variates that can draw this, so hitting
        // it means the configuration lied; travel time would be undefined.
        return Err(MobilityError::NonPositiveSpeed(node));
    }

    let dist = kin.position.distance_to(dest);
    kin.updated_at = now;
    *phase = WaypointPhase::Traveling { dest };

    if dist == 0.0 {
        // Destination is the current position: zero-length traverse,
        // arrival fires immediately.
        kin.velocity = Vector3::ZERO;
        return Ok(now);
    }

    kin.velocity = (dest - kin.position) * (speed / dist);
    Ok(now + SimTime::from_secs(dist / speed))
}
