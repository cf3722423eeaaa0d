pub mod config;
pub mod events;
pub mod storage;
pub mod world;

pub use self::config::SimulationConfig;
pub use self::events::{BodyEvent, BodyEventType, EventQueue, FlightEvent, FlightEventType};
pub use self::storage::{BodyStorage, Storage};
pub use self::world::{FlightWorld, SimBody};

/// A unique identifier for a body in the flight world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) u32);
