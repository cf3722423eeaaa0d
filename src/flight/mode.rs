#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Direction of a scripted warp transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum WarpDirection {
    /// Accelerate from rest up to the profile's warp cruise velocity
    In,

    /// Decelerate from cruise back down to rest
    Out,
}

/// A running scripted warp transition.
///
/// While present, the forward axis follows the warp velocity ramp instead
/// of throttle input. The transition expires once `elapsed` reaches
/// `total`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SpecialWarp {
    /// Which way the transition runs
    pub direction: WarpDirection,

    /// Time spent in the transition so far
    pub elapsed: f32,

    /// Total duration of the transition
    pub total: f32,
}

/// Mutable per-object mode flags and timers consumed by the integrator.
///
/// External event paths (impulse application, mission scripting) set these
/// between ticks; `step` reads them every tick and winds down the timers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct TransientModeState {
    /// Afterburner currently engaged
    pub afterburner_active: bool,

    /// Glide mode currently engaged
    pub gliding: bool,

    /// Object is disabled and adrift
    pub dead_drift: bool,

    /// Seconds left in the impulse-triggered reduced-damping window
    pub reduced_damping_remaining: f32,

    /// Running scripted warp transition, mutually exclusive with normal
    /// throttle-driven forward control
    pub special_warp: Option<SpecialWarp>,
}

impl TransientModeState {
    /// Creates a fresh mode state with no modes engaged
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the reduced-damping window is currently open
    pub fn reduced_damping_active(&self) -> bool {
        self.reduced_damping_remaining > 0.0
    }

    /// Arms the reduced-damping window.
    ///
    /// Re-arming while a window is already open resets the countdown to
    /// the full duration; the latest hit dominates.
    pub fn arm_reduced_damping(&mut self, duration: f32) {
        if duration.is_finite() && duration > 0.0 {
            self.reduced_damping_remaining = duration;
        }
    }

    /// Begins a scripted warp transition, replacing any running one
    pub fn start_special_warp(&mut self, direction: WarpDirection, duration: f32) {
        self.special_warp = Some(SpecialWarp {
            direction,
            elapsed: 0.0,
            total: duration.max(0.0),
        });
    }

    /// Ends the scripted warp transition, returning control to the throttle
    pub fn end_special_warp(&mut self) {
        self.special_warp = None;
    }
}
