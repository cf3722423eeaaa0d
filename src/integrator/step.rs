use crate::flight::{ControlInput, PhysicsProfile, RigidBodyState, TransientModeState};
use crate::integrator::axis::{damped_approach, select_tau, AxisStep};
use crate::integrator::regime::FlightRegime;
use crate::integrator::warp::warp_step;
use crate::math::{clamp, Quaternion, Vector3, EPSILON};

/// Smallest tick duration accepted by the integrator; a non-positive
/// `dt` is clamped up to this instead of failing
pub const MIN_TIME_STEP: f32 = 1.0e-4;

/// Outcome flags from one integrator tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    /// A scripted warp transition ran its full duration this tick
    pub warp_finished: bool,

    /// The inputs were rejected (non-finite) and the state left unchanged
    pub rejected: bool,
}

/// Advances one body by one simulation tick.
///
/// Each local linear and angular axis independently approaches its target
/// velocity with exponential damping; the flight regime picks the target
/// rule and time-constant set. Deterministic, allocation-free, and exact
/// for any tick duration thanks to the closed-form displacement integral.
///
/// Non-finite state or input leaves the body untouched and reports the
/// tick as rejected, so one bad object cannot halt a whole simulation
/// pass. A non-positive `dt` is clamped to [`MIN_TIME_STEP`].
pub fn step(
    state: &mut RigidBodyState,
    profile: &PhysicsProfile,
    mode: &mut TransientModeState,
    input: &ControlInput,
    dt: f32,
) -> StepReport {
    let mut report = StepReport::default();

    if !dt.is_finite() || !state.is_finite() || !input.is_finite() {
        log::warn!("integrator step rejected non-finite input; state left unchanged");
        report.rejected = true;
        return report;
    }

    let dt = dt.max(MIN_TIME_STEP);

    let regime = FlightRegime::resolve(mode, profile);
    let damp_multiplier = reduced_damping_multiplier(mode, profile);

    let local_velocity = state.local_linear_velocity();

    // Side and vertical axes are throttle-driven in every regime except
    // dead-drift, where translation keeps its momentum.
    let side = lateral_axis(
        local_velocity.x,
        input.side,
        profile.max_side_velocity,
        profile,
        regime,
        damp_multiplier,
        dt,
    );
    let vertical = lateral_axis(
        local_velocity.y,
        input.vertical,
        profile.max_vertical_velocity,
        profile,
        regime,
        damp_multiplier,
        dt,
    );

    let forward = match regime {
        FlightRegime::Warp(warp) => {
            let result = warp_step(warp, profile, local_velocity.z, dt);
            if result.finished {
                mode.special_warp = None;
                report.warp_finished = true;
            } else {
                mode.special_warp = Some(result.advanced);
            }
            result.axis
        }
        FlightRegime::Glide => glide_axis(local_velocity.z, input.forward, profile, dt),
        FlightRegime::DeadDrift => AxisStep::coasting(local_velocity.z, dt),
        FlightRegime::Afterburner => {
            forward_axis(local_velocity.z, input.forward, profile, true, damp_multiplier, dt)
        }
        FlightRegime::Normal => {
            forward_axis(local_velocity.z, input.forward, profile, false, damp_multiplier, dt)
        }
    };

    // Compose the per-axis results back into world space using the
    // orientation the tick started with.
    let orientation = state.orientation;
    let local_displacement = Vector3::new(side.displacement, vertical.displacement, forward.displacement);
    let new_local_velocity = Vector3::new(side.velocity, vertical.velocity, forward.velocity);

    state.position += orientation.rotate_vector(local_displacement);
    state.linear_velocity = orientation.rotate_vector(new_local_velocity);

    // Angular axes: damped approach on the rates, then sequential
    // local-axis rotations, then renormalize to keep the orientation a
    // valid rotation under repeated composition.
    let angular = angular_axes(state.angular_velocity, input, profile, regime, damp_multiplier, dt);
    state.angular_velocity = angular;

    let mut rotation = state.orientation;
    for (axis, rate) in [
        (Vector3::unit_x(), angular.x),
        (Vector3::unit_y(), angular.y),
        (Vector3::unit_z(), angular.z),
    ] {
        let angle = rate * dt;
        if angle.abs() > EPSILON {
            rotation = rotation * Quaternion::from_axis_angle(axis, angle);
        }
    }
    state.orientation = rotation.normalize();

    mode.reduced_damping_remaining = (mode.reduced_damping_remaining - dt).max(0.0);

    report
}

/// The deceleration-widening factor for this tick
fn reduced_damping_multiplier(mode: &TransientModeState, profile: &PhysicsProfile) -> f32 {
    if mode.reduced_damping_active()
        && profile.supports(crate::flight::ProfileFlags::REDUCED_DAMPING)
        && profile.reduced_damping_factor.is_finite()
        && profile.reduced_damping_factor > 0.0
    {
        profile.reduced_damping_factor
    } else {
        1.0
    }
}

fn lateral_axis(
    current: f32,
    throttle: f32,
    max_velocity: f32,
    profile: &PhysicsProfile,
    regime: FlightRegime,
    damp_multiplier: f32,
    dt: f32,
) -> AxisStep {
    if regime == FlightRegime::DeadDrift {
        return AxisStep::coasting(current, dt);
    }

    let target = throttle * max_velocity;
    let tau = select_tau(
        current,
        target,
        profile.lateral_accel_tau,
        profile.lateral_decel_tau,
        damp_multiplier,
    );

    damped_approach(current, target, tau, dt, max_velocity)
}

fn forward_axis(
    current: f32,
    throttle: f32,
    profile: &PhysicsProfile,
    afterburner: bool,
    damp_multiplier: f32,
    dt: f32,
) -> AxisStep {
    let max_forward = if afterburner {
        profile.afterburner_max_velocity
    } else {
        profile.max_forward_velocity
    };

    let (target, limit) = if throttle >= 0.0 {
        (throttle * max_forward, max_forward)
    } else {
        (throttle * profile.max_reverse_velocity, profile.max_reverse_velocity)
    };

    let (accel_tau, decel_tau) = if afterburner {
        (profile.afterburner_accel_tau, profile.afterburner_decel_tau)
    } else {
        (profile.forward_accel_tau, profile.forward_decel_tau)
    };

    let tau = select_tau(current, target, accel_tau, decel_tau, damp_multiplier);

    damped_approach(current, target, tau, dt, limit)
}

/// Glide: throttle acts as acceleration, not a velocity target, clamped
/// to the configured glide cap
fn glide_axis(current: f32, throttle: f32, profile: &PhysicsProfile, dt: f32) -> AxisStep {
    let cap = profile.glide_cap().abs();
    let accel = throttle * profile.max_forward_velocity * profile.glide_accel_multiplier;
    let velocity = clamp(current + accel * dt, -cap, cap);

    AxisStep {
        velocity,
        displacement: velocity * dt,
    }
}

fn angular_axes(
    current: Vector3,
    input: &ControlInput,
    profile: &PhysicsProfile,
    regime: FlightRegime,
    damp_multiplier: f32,
    dt: f32,
) -> Vector3 {
    if regime == FlightRegime::DeadDrift {
        // Maximal rotational damping: the hulk stops tumbling at once
        return Vector3::zero();
    }

    let rate = |axis_current: f32, request: f32, max_rate: f32| {
        let target = request * max_rate;
        let tau = select_tau(
            axis_current,
            target,
            profile.rotational_accel_tau,
            profile.rotational_damp_tau,
            damp_multiplier,
        );

        damped_approach(axis_current, target, tau, dt, max_rate).velocity
    };

    Vector3::new(
        rate(current.x, input.pitch, profile.max_angular_velocity.x),
        rate(current.y, input.yaw, profile.max_angular_velocity.y),
        rate(current.z, input.roll, profile.max_angular_velocity.z),
    )
}
