use crate::core::events::{BodyEvent, BodyEventType, FlightEvent, FlightEventType};
use crate::core::storage::Storage;
use crate::core::{BodyHandle, BodyStorage, EventQueue, SimulationConfig};
use crate::error::PhysicsError;
use crate::flight::{
    ControlInput, PhysicsProfile, ProfileFlags, RigidBodyState, TransientModeState, WarpDirection,
};
use crate::integrator::{step, MIN_TIME_STEP};
use crate::math::{clamp, Transform, Vector3};
use crate::Result;

use std::sync::Arc;

/// One simulated body: its state, mode flags, latest control input, and
/// a shared reference to its class profile
pub struct SimBody {
    /// Pose and velocity state
    pub state: RigidBodyState,

    /// Transient mode flags and timers
    pub mode: TransientModeState,

    /// The control input consumed on the next tick
    pub input: ControlInput,

    /// The immutable per-class configuration
    pub profile: Arc<PhysicsProfile>,
}

/// The simulation container that owns all bodies and advances them each
/// tick.
///
/// Per-body state is disjoint and profiles are shared read-only, so the
/// step phase is data-parallel with the `parallel` feature enabled. The
/// external event entry points (impulses, warp transitions, mode
/// switches) take `&mut self` and therefore cannot race the step phase.
pub struct FlightWorld {
    /// All bodies in the world
    bodies: BodyStorage<SimBody>,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// Queue of simulation events
    events: EventQueue,

    /// The total elapsed simulation time
    time: f32,
}

impl FlightWorld {
    /// Creates a new flight world with default settings
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    /// Creates a new flight world with the given configuration
    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            bodies: BodyStorage::new(),
            config,
            events: EventQueue::new(),
            time: 0.0,
        }
    }

    /// Returns the current simulation time
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Returns a reference to the simulation configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns a mutable reference to the simulation configuration
    pub fn config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }

    /// Returns the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Adds a body to the world and returns its handle
    pub fn add_body(&mut self, state: RigidBodyState, profile: Arc<PhysicsProfile>) -> BodyHandle {
        let handle = self.bodies.add(SimBody {
            state,
            mode: TransientModeState::new(),
            input: ControlInput::neutral(),
            profile,
        });

        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Added,
            body: handle,
        });

        handle
    }

    /// Removes a body from the world
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<SimBody> {
        let body = self.bodies.remove(handle).ok_or_else(|| {
            PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle))
        })?;

        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Removed,
            body: handle,
        });

        Ok(body)
    }

    /// Gets a reference to a body's state
    pub fn get_state(&self, handle: BodyHandle) -> Result<&RigidBodyState> {
        Ok(&self.bodies.get_body(handle)?.state)
    }

    /// Gets a mutable reference to a body's state
    pub fn get_state_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBodyState> {
        Ok(&mut self.bodies.get_body_mut(handle)?.state)
    }

    /// Gets a reference to a body's transient mode state
    pub fn get_mode(&self, handle: BodyHandle) -> Result<&TransientModeState> {
        Ok(&self.bodies.get_body(handle)?.mode)
    }

    /// Gets a body's pose as a transform
    pub fn get_transform(&self, handle: BodyHandle) -> Result<Transform> {
        Ok(self.bodies.get_body(handle)?.state.transform())
    }

    /// Gets a reference to a body's class profile
    pub fn get_profile(&self, handle: BodyHandle) -> Result<&Arc<PhysicsProfile>> {
        Ok(&self.bodies.get_body(handle)?.profile)
    }

    /// Sets the control input consumed on the next tick
    pub fn set_input(&mut self, handle: BodyHandle, input: ControlInput) -> Result<()> {
        self.bodies.get_body_mut(handle)?.input = input;
        Ok(())
    }

    /// Engages or disengages the afterburner
    pub fn set_afterburner(&mut self, handle: BodyHandle, active: bool) -> Result<()> {
        let body = self.bodies.get_body_mut(handle)?;
        if active && !body.profile.supports(ProfileFlags::AFTERBURNER) {
            return Err(PhysicsError::InvalidParameter(
                "profile does not support afterburner".into(),
            ));
        }
        body.mode.afterburner_active = active;
        Ok(())
    }

    /// Engages or disengages glide mode
    pub fn set_gliding(&mut self, handle: BodyHandle, gliding: bool) -> Result<()> {
        let body = self.bodies.get_body_mut(handle)?;
        if gliding && !body.profile.supports(ProfileFlags::GLIDE) {
            return Err(PhysicsError::InvalidParameter(
                "profile does not support glide".into(),
            ));
        }
        body.mode.gliding = gliding;
        Ok(())
    }

    /// Puts the body into or out of dead-drift
    pub fn set_dead_drift(&mut self, handle: BodyHandle, adrift: bool) -> Result<()> {
        let body = self.bodies.get_body_mut(handle)?;
        if adrift && !body.profile.supports(ProfileFlags::DEAD_DRIFT) {
            return Err(PhysicsError::InvalidParameter(
                "profile does not support dead-drift".into(),
            ));
        }
        body.mode.dead_drift = adrift;
        Ok(())
    }

    /// Applies an instantaneous velocity change from a collision or hit.
    ///
    /// `impulse_velocity` is a world-space delta added to the linear
    /// velocity; `impulse_angular_velocity` is a local-rate delta added
    /// to the angular velocity. Arms the reduced-damping window if the
    /// profile supports it; re-arming resets the countdown.
    pub fn apply_impulse(
        &mut self,
        handle: BodyHandle,
        impulse_velocity: Vector3,
        impulse_angular_velocity: Vector3,
    ) -> Result<()> {
        if !impulse_velocity.is_finite() || !impulse_angular_velocity.is_finite() {
            return Err(PhysicsError::InvalidParameter(
                "impulse components must be finite".into(),
            ));
        }

        let body = self.bodies.get_body_mut(handle)?;
        body.state.linear_velocity += impulse_velocity;
        body.state.angular_velocity += impulse_angular_velocity;

        if body.profile.supports(ProfileFlags::REDUCED_DAMPING) {
            body.mode
                .arm_reduced_damping(body.profile.reduced_damping_duration);
        }

        Ok(())
    }

    /// Begins a scripted warp transition on a body
    pub fn start_special_warp(
        &mut self,
        handle: BodyHandle,
        direction: WarpDirection,
        duration: f32,
    ) -> Result<()> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(PhysicsError::InvalidParameter(
                "warp duration must be positive".into(),
            ));
        }

        let body = self.bodies.get_body_mut(handle)?;
        if !body.profile.supports(ProfileFlags::WARP) {
            return Err(PhysicsError::InvalidParameter(
                "profile does not support warp".into(),
            ));
        }

        body.mode.start_special_warp(direction, duration);
        Ok(())
    }

    /// Ends a scripted warp transition early, returning forward control
    /// to the throttle
    pub fn end_special_warp(&mut self, handle: BodyHandle) -> Result<()> {
        self.bodies.get_body_mut(handle)?.mode.end_special_warp();
        Ok(())
    }

    /// Advances every body by one tick.
    ///
    /// The tick duration is clamped to the configured bounds. Warp
    /// transitions that expire during the tick enqueue a
    /// [`FlightEventType::WarpFinished`] event after the step phase.
    pub fn step(&mut self, dt: f32) {
        if !dt.is_finite() {
            log::warn!("flight world step skipped: non-finite dt");
            return;
        }

        let dt = clamp(dt, MIN_TIME_STEP, self.config.max_time_step);

        #[cfg(feature = "parallel")]
        let finished: Vec<BodyHandle> = {
            use rayon::iter::ParallelIterator;
            self.bodies
                .par_iter_mut()
                .filter_map(|(handle, body)| {
                    let report = step(&mut body.state, &body.profile, &mut body.mode, &body.input, dt);
                    report.warp_finished.then_some(handle)
                })
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let finished: Vec<BodyHandle> = self
            .bodies
            .iter_mut()
            .filter_map(|(handle, body)| {
                let report = step(&mut body.state, &body.profile, &mut body.mode, &body.input, dt);
                report.warp_finished.then_some(handle)
            })
            .collect();

        for handle in finished {
            self.events.add_flight_event(FlightEvent {
                event_type: FlightEventType::WarpFinished,
                body: handle,
            });
        }

        self.time += dt;
    }

    /// Returns a reference to the event queue
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Returns a mutable reference to the event queue for draining
    pub fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }
}

impl Default for FlightWorld {
    fn default() -> Self {
        Self::new()
    }
}
