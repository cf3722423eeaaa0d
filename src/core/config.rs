#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for the flight simulation pass
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// The nominal fixed time step for the simulation
    pub time_step: f32,

    /// Upper bound applied to the tick duration; protects the damped
    /// model's accuracy against stalls in the host loop
    pub max_time_step: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0 / 60.0,
            max_time_step: 0.1,
        }
    }
}
