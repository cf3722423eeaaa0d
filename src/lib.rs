pub mod math;
pub mod flight;
pub mod integrator;
pub mod core;

/// Re-export common types for easier usage
pub use crate::core::{BodyHandle, FlightWorld, SimulationConfig};
pub use crate::flight::{
    ControlInput, PhysicsProfile, ProfileFlags, RigidBodyState, TransientModeState, WarpDirection,
};
pub use crate::integrator::step;
pub use crate::math::{Quaternion, Vector3};

/// Error types for the flight dynamics library
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Internal error: {0}")]
        InternalError(String),
    }
}

/// Result type for flight dynamics operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
