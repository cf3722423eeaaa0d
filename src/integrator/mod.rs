mod axis;
mod regime;
mod step;
mod warp;

pub use self::axis::{damped_approach, select_tau, AxisStep};
pub use self::regime::FlightRegime;
pub use self::step::{step, StepReport, MIN_TIME_STEP};
