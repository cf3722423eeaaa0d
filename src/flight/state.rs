use crate::math::{Quaternion, Transform, Vector3};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The pose and velocity state of one simulated ship or object.
///
/// The local frame convention is +Z forward, +X right, +Y up. Linear
/// velocity is stored in world space; angular velocity is stored as local
/// pitch/yaw/roll rates (radians per second about local X/Y/Z).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct RigidBodyState {
    /// Position in world space
    pub position: Vector3,

    /// Orientation in world space
    pub orientation: Quaternion,

    /// Linear velocity in world space
    pub linear_velocity: Vector3,

    /// Angular velocity as local-axis rates (pitch, yaw, roll)
    pub angular_velocity: Vector3,

    /// Mass of the body, must be positive
    pub mass: f32,
}

impl RigidBodyState {
    /// Creates a new body state at rest with the given pose and mass.
    ///
    /// A non-positive or non-finite mass falls back to 1.0.
    pub fn new(position: Vector3, orientation: Quaternion, mass: f32) -> Self {
        let mass = if mass.is_finite() && mass > 0.0 {
            mass
        } else {
            1.0
        };

        Self {
            position,
            orientation: orientation.normalize(),
            linear_velocity: Vector3::zero(),
            angular_velocity: Vector3::zero(),
            mass,
        }
    }

    /// Creates a new body state at rest at the given position
    pub fn at_position(position: Vector3) -> Self {
        Self::new(position, Quaternion::identity(), 1.0)
    }

    /// Returns the body's pose as a transform
    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.orientation)
    }

    /// Returns the body's forward direction in world space
    pub fn forward(&self) -> Vector3 {
        self.orientation.rotate_vector(Vector3::unit_z())
    }

    /// Returns the body's linear velocity expressed in the local frame
    pub fn local_linear_velocity(&self) -> Vector3 {
        self.orientation.inverse_rotate_vector(self.linear_velocity)
    }

    /// Returns true if every component of the state is a finite number
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.orientation.is_finite()
            && self.linear_velocity.is_finite()
            && self.angular_velocity.is_finite()
            && self.mass.is_finite()
    }
}

impl Default for RigidBodyState {
    fn default() -> Self {
        Self::at_position(Vector3::zero())
    }
}
