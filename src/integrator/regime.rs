use crate::flight::{PhysicsProfile, ProfileFlags, SpecialWarp, TransientModeState};

/// The flight regime in effect for one tick.
///
/// Resolved once at the top of `step` from the transient mode flags and
/// the profile's capability flags, so the integrator branches on a single
/// tagged value instead of scattered booleans. A mode the profile does
/// not support resolves as if the flag were clear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightRegime {
    /// Throttle-driven flight with the normal time-constant set
    Normal,

    /// Throttle-driven flight with the afterburner constants
    Afterburner,

    /// Forward throttle acts as acceleration instead of a velocity target
    Glide,

    /// Disabled and adrift: translation holds, rotation bleeds off
    DeadDrift,

    /// Scripted warp transition owns the forward axis
    Warp(SpecialWarp),
}

impl FlightRegime {
    /// Resolves the regime for this tick.
    ///
    /// Precedence: warp, then dead-drift, then glide, then afterburner.
    /// Warp and dead-drift are exclusive whole-ship states; glide wins
    /// over afterburner because glide redefines what forward throttle
    /// means.
    pub fn resolve(mode: &TransientModeState, profile: &PhysicsProfile) -> Self {
        if let Some(warp) = mode.special_warp {
            if profile.supports(ProfileFlags::WARP) {
                return Self::Warp(warp);
            }
        }

        if mode.dead_drift && profile.supports(ProfileFlags::DEAD_DRIFT) {
            return Self::DeadDrift;
        }

        if mode.gliding && profile.supports(ProfileFlags::GLIDE) {
            return Self::Glide;
        }

        if mode.afterburner_active && profile.supports(ProfileFlags::AFTERBURNER) {
            return Self::Afterburner;
        }

        Self::Normal
    }
}
