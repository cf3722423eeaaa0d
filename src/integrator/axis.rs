use crate::math::{clamp, EPSILON};

/// The result of advancing one velocity axis over a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStep {
    /// The axis velocity at the end of the tick
    pub velocity: f32,

    /// The distance (or angle) covered along the axis during the tick
    pub displacement: f32,
}

impl AxisStep {
    /// An axis that holds its current velocity for the whole tick
    #[inline]
    pub fn coasting(velocity: f32, dt: f32) -> Self {
        Self {
            velocity,
            displacement: velocity * dt,
        }
    }
}

/// Advances one axis toward `target` with exponential damping.
///
/// `tau` is the time constant of the approach; a non-positive or
/// non-finite value means the axis responds instantaneously. `limit` is
/// the axis's maximum velocity magnitude, enforced as a hard clamp only
/// on the instantaneous path (the exponential approach cannot overshoot
/// a fixed target by construction).
///
/// The displacement is the closed-form integral of the velocity curve
/// over the tick, so the result is exact for any `dt` rather than a
/// discretized Euler step.
pub fn damped_approach(current: f32, target: f32, tau: f32, dt: f32, limit: f32) -> AxisStep {
    if !tau.is_finite() || tau < EPSILON {
        // Instantaneous response
        let velocity = clamp(target, -limit.abs(), limit.abs());
        return AxisStep {
            velocity,
            displacement: velocity * dt,
        };
    }

    let e = (-dt / tau).exp();
    let offset = current - target;

    AxisStep {
        velocity: target + offset * e,
        displacement: target * dt + offset * tau * (1.0 - e),
    }
}

/// Picks the time constant for an axis.
///
/// The acceleration constant applies only when pushing away from zero on
/// the side the velocity is already on; braking and reversing through
/// zero are deceleration. `damp_multiplier` widens the deceleration
/// constant while the reduced-damping window is open.
pub fn select_tau(
    current: f32,
    target: f32,
    accel_tau: f32,
    decel_tau: f32,
    damp_multiplier: f32,
) -> f32 {
    let accelerating = target * current >= 0.0 && target.abs() > current.abs();
    if accelerating {
        accel_tau
    } else {
        decel_tau * damp_multiplier
    }
}
