use bitflags::bitflags;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// Capability flags for a ship class, gating the optional flight modes
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProfileFlags: u32 {
        /// Class has an afterburner
        const AFTERBURNER = 0x01;

        /// Class can engage glide mode
        const GLIDE = 0x02;

        /// Class can run the scripted warp profile
        const WARP = 0x04;

        /// Impacts arm the reduced-damping window
        const REDUCED_DAMPING = 0x08;

        /// Class can be put into dead-drift (disabled/adrift)
        const DEAD_DRIFT = 0x10;
    }
}

#[cfg(feature = "serialize")]
impl Serialize for ProfileFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

#[cfg(feature = "serialize")]
impl<'de> Deserialize<'de> for ProfileFlags {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let bits = u32::deserialize(deserializer)?;
        Ok(ProfileFlags::from_bits_truncate(bits))
    }
}

/// Per-class flight dynamics configuration.
///
/// Loaded once at class registration time and shared by reference; the
/// integrator never mutates it. Velocities are in meters per second,
/// angular velocities in radians per second, time constants in seconds.
/// A non-positive or non-finite time constant means the axis responds
/// instantaneously.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct PhysicsProfile {
    /// Maximum forward velocity
    pub max_forward_velocity: f32,

    /// Maximum reverse velocity (magnitude)
    pub max_reverse_velocity: f32,

    /// Maximum sideways slide velocity (magnitude)
    pub max_side_velocity: f32,

    /// Maximum vertical slide velocity (magnitude)
    pub max_vertical_velocity: f32,

    /// Maximum angular velocity per local axis (pitch, yaw, roll)
    pub max_angular_velocity: crate::math::Vector3,

    /// Time constant for accelerating along the forward axis
    pub forward_accel_tau: f32,

    /// Time constant for decelerating along the forward axis
    pub forward_decel_tau: f32,

    /// Time constant for accelerating along the side/vertical axes
    pub lateral_accel_tau: f32,

    /// Time constant for decelerating along the side/vertical axes
    pub lateral_decel_tau: f32,

    /// Time constant for spinning up toward a requested rotation rate
    pub rotational_accel_tau: f32,

    /// Time constant for damping rotation back toward the requested rate
    pub rotational_damp_tau: f32,

    /// Maximum forward velocity with the afterburner engaged
    pub afterburner_max_velocity: f32,

    /// Forward acceleration time constant with the afterburner engaged
    pub afterburner_accel_tau: f32,

    /// Forward deceleration time constant with the afterburner engaged
    pub afterburner_decel_tau: f32,

    /// Multiplier applied to forward throttle when it acts as acceleration
    /// in glide mode
    pub glide_accel_multiplier: f32,

    /// Speed cap while gliding; falls back to `max_forward_velocity` if unset
    pub glide_speed_cap: Option<f32>,

    /// Cruise velocity of the scripted warp profile
    pub warp_cruise_velocity: f32,

    /// Time constant of the scripted warp ramp
    pub warp_tau: f32,

    /// Multiplier applied to deceleration time constants while the
    /// reduced-damping window is open (> 1.0 means looser control)
    pub reduced_damping_factor: f32,

    /// Duration of the reduced-damping window armed by an impulse
    pub reduced_damping_duration: f32,

    /// Which optional flight modes this class supports
    pub flags: ProfileFlags,
}

impl PhysicsProfile {
    /// Returns the speed cap used while gliding
    pub fn glide_cap(&self) -> f32 {
        self.glide_speed_cap.unwrap_or(self.max_forward_velocity)
    }

    /// Returns true if the profile allows the given mode flag
    pub fn supports(&self, flag: ProfileFlags) -> bool {
        self.flags.contains(flag)
    }
}

impl Default for PhysicsProfile {
    fn default() -> Self {
        Self {
            max_forward_velocity: 100.0,
            max_reverse_velocity: 30.0,
            max_side_velocity: 40.0,
            max_vertical_velocity: 40.0,
            max_angular_velocity: crate::math::Vector3::new(1.2, 1.0, 1.8),
            forward_accel_tau: 1.0,
            forward_decel_tau: 0.8,
            lateral_accel_tau: 0.5,
            lateral_decel_tau: 0.5,
            rotational_accel_tau: 0.4,
            rotational_damp_tau: 0.3,
            afterburner_max_velocity: 200.0,
            afterburner_accel_tau: 0.5,
            afterburner_decel_tau: 1.2,
            glide_accel_multiplier: 1.0,
            glide_speed_cap: None,
            warp_cruise_velocity: 400.0,
            warp_tau: 1.5,
            reduced_damping_factor: 4.0,
            reduced_damping_duration: 2.0,
            flags: ProfileFlags::AFTERBURNER
                | ProfileFlags::GLIDE
                | ProfileFlags::WARP
                | ProfileFlags::REDUCED_DAMPING
                | ProfileFlags::DEAD_DRIFT,
        }
    }
}
