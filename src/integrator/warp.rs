use crate::flight::{PhysicsProfile, SpecialWarp, WarpDirection};
use crate::integrator::axis::{damped_approach, AxisStep};

/// The forward-axis result of one tick of a scripted warp transition
#[derive(Debug, Clone, Copy)]
pub struct WarpStep {
    /// Forward velocity and displacement for the tick
    pub axis: AxisStep,

    /// The transition record advanced by `dt`
    pub advanced: SpecialWarp,

    /// True once the transition has run its full duration
    pub finished: bool,
}

/// Advances a scripted warp transition by one tick.
///
/// Warp-in ramps the forward velocity from its current value up to the
/// profile's cruise velocity; warp-out ramps it down to rest. Both use
/// the same exponential form as normal flight with the fixed warp time
/// constant, so the in/out curves are symmetric.
pub fn warp_step(warp: SpecialWarp, profile: &PhysicsProfile, current: f32, dt: f32) -> WarpStep {
    let target = match warp.direction {
        WarpDirection::In => profile.warp_cruise_velocity,
        WarpDirection::Out => 0.0,
    };

    let axis = damped_approach(
        current,
        target,
        profile.warp_tau,
        dt,
        profile.warp_cruise_velocity,
    );

    let advanced = SpecialWarp {
        elapsed: warp.elapsed + dt,
        ..warp
    };

    WarpStep {
        axis,
        finished: advanced.elapsed >= advanced.total,
        advanced,
    }
}
