use crate::math::clamp;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A per-tick desired-motion request from player input or AI.
///
/// All fields are normalized to [-1, 1]: linear axes are throttle
/// fractions of the profile's maximum velocities, angular axes are rate
/// requests as fractions of the maximum rotational velocities.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ControlInput {
    /// Forward (+) / reverse (-) throttle
    pub forward: f32,

    /// Rightward (+) / leftward (-) slide throttle
    pub side: f32,

    /// Upward (+) / downward (-) slide throttle
    pub vertical: f32,

    /// Pitch rate request (nose up positive)
    pub pitch: f32,

    /// Yaw rate request
    pub yaw: f32,

    /// Roll rate request
    pub roll: f32,
}

impl ControlInput {
    /// Creates a new control input, clamping every axis to [-1, 1].
    ///
    /// Non-finite components are treated as zero.
    pub fn new(forward: f32, side: f32, vertical: f32, pitch: f32, yaw: f32, roll: f32) -> Self {
        Self {
            forward: Self::sanitize(forward),
            side: Self::sanitize(side),
            vertical: Self::sanitize(vertical),
            pitch: Self::sanitize(pitch),
            yaw: Self::sanitize(yaw),
            roll: Self::sanitize(roll),
        }
    }

    /// Creates a neutral input (all axes zero)
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Creates an input with only forward throttle set
    pub fn forward_only(forward: f32) -> Self {
        Self::new(forward, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Returns true if every axis is a finite number
    pub fn is_finite(&self) -> bool {
        self.forward.is_finite()
            && self.side.is_finite()
            && self.vertical.is_finite()
            && self.pitch.is_finite()
            && self.yaw.is_finite()
            && self.roll.is_finite()
    }

    fn sanitize(value: f32) -> f32 {
        if value.is_finite() {
            clamp(value, -1.0, 1.0)
        } else {
            0.0
        }
    }
}
