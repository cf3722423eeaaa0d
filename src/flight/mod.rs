mod control;
mod mode;
mod profile;
mod state;

pub use self::control::ControlInput;
pub use self::mode::{SpecialWarp, TransientModeState, WarpDirection};
pub use self::profile::{PhysicsProfile, ProfileFlags};
pub use self::state::RigidBodyState;
