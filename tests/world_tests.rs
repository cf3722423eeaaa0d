use approx::assert_relative_eq;
use flightdyn::core::{BodyEventType, FlightEventType};
use flightdyn::error::PhysicsError;
use flightdyn::math::Vector3;
use flightdyn::{
    ControlInput, FlightWorld, PhysicsProfile, ProfileFlags, RigidBodyState, WarpDirection,
};
use std::sync::Arc;

fn spawn(world: &mut FlightWorld, profile: &Arc<PhysicsProfile>) -> flightdyn::BodyHandle {
    world.add_body(RigidBodyState::at_position(Vector3::zero()), profile.clone())
}

#[test]
fn test_add_and_remove_bodies() {
    let mut world = FlightWorld::new();
    let profile = Arc::new(PhysicsProfile::default());

    let a = spawn(&mut world, &profile);
    let b = spawn(&mut world, &profile);
    assert_ne!(a, b);
    assert_eq!(world.body_count(), 2);

    world.remove_body(a).unwrap();
    assert_eq!(world.body_count(), 1);
    assert!(world.get_state(a).is_err());
    assert!(world.get_state(b).is_ok());

    // Lifecycle events were queued in order
    let added = world.events().get_body_events_of_type(BodyEventType::Added);
    assert_eq!(added.len(), 2);
    let removed = world.events().get_body_events_of_type(BodyEventType::Removed);
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].body, a);
}

#[test]
fn test_unknown_handle_is_resource_not_found() {
    let mut world = FlightWorld::new();
    let profile = Arc::new(PhysicsProfile::default());
    let handle = spawn(&mut world, &profile);
    world.remove_body(handle).unwrap();

    match world.get_state(handle) {
        Err(PhysicsError::ResourceNotFound(_)) => {}
        other => panic!("expected ResourceNotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_throttle_moves_ship_forward() {
    let mut world = FlightWorld::new();
    let profile = Arc::new(PhysicsProfile::default());
    let handle = spawn(&mut world, &profile);

    world.set_input(handle, ControlInput::forward_only(1.0)).unwrap();

    for _ in 0..60 {
        world.step(1.0 / 60.0);
    }

    let state = world.get_state(handle).unwrap();
    assert!(state.position.z > 0.0, "ship must have moved along local forward");
    assert!(state.linear_velocity.z > 0.0);
    assert_relative_eq!(world.time(), 1.0, epsilon = 1.0e-4);
}

#[test]
fn test_mode_setters_are_gated_by_profile_flags() {
    let mut world = FlightWorld::new();
    let profile = Arc::new(PhysicsProfile {
        flags: ProfileFlags::empty(),
        ..PhysicsProfile::default()
    });
    let handle = spawn(&mut world, &profile);

    assert!(matches!(
        world.set_afterburner(handle, true),
        Err(PhysicsError::InvalidParameter(_))
    ));
    assert!(matches!(
        world.set_gliding(handle, true),
        Err(PhysicsError::InvalidParameter(_))
    ));
    assert!(matches!(
        world.set_dead_drift(handle, true),
        Err(PhysicsError::InvalidParameter(_))
    ));
    assert!(matches!(
        world.start_special_warp(handle, WarpDirection::In, 5.0),
        Err(PhysicsError::InvalidParameter(_))
    ));

    // Disengaging is always allowed
    assert!(world.set_afterburner(handle, false).is_ok());
}

#[test]
fn test_apply_impulse_arms_reduced_damping() {
    let mut world = FlightWorld::new();
    let profile = Arc::new(PhysicsProfile::default());
    let handle = spawn(&mut world, &profile);

    world
        .apply_impulse(handle, Vector3::new(0.0, 0.0, -50.0), Vector3::zero())
        .unwrap();

    let state = world.get_state(handle).unwrap();
    assert_relative_eq!(state.linear_velocity.z, -50.0);
    assert!(world.get_mode(handle).unwrap().reduced_damping_active());

    // The window winds down over subsequent ticks and eventually closes
    for _ in 0..180 {
        world.step(1.0 / 60.0);
    }
    assert!(!world.get_mode(handle).unwrap().reduced_damping_active());
}

#[test]
fn test_apply_impulse_retrigger_resets_window() {
    let mut world = FlightWorld::new();
    let profile = Arc::new(PhysicsProfile::default());
    let handle = spawn(&mut world, &profile);

    world.apply_impulse(handle, Vector3::new(5.0, 0.0, 0.0), Vector3::zero()).unwrap();
    let full = world.get_mode(handle).unwrap().reduced_damping_remaining;

    // Let half the window elapse, then hit the ship again
    for _ in 0..60 {
        world.step(1.0 / 60.0);
    }
    assert!(world.get_mode(handle).unwrap().reduced_damping_remaining < full);

    world.apply_impulse(handle, Vector3::new(5.0, 0.0, 0.0), Vector3::zero()).unwrap();
    assert_relative_eq!(
        world.get_mode(handle).unwrap().reduced_damping_remaining,
        full,
        epsilon = 1.0e-5
    );
}

#[test]
fn test_non_finite_impulse_is_invalid() {
    let mut world = FlightWorld::new();
    let profile = Arc::new(PhysicsProfile::default());
    let handle = spawn(&mut world, &profile);

    assert!(matches!(
        world.apply_impulse(handle, Vector3::new(f32::NAN, 0.0, 0.0), Vector3::zero()),
        Err(PhysicsError::InvalidParameter(_))
    ));

    // The ship was left untouched
    assert!(world.get_state(handle).unwrap().linear_velocity.is_zero());
}

#[test]
fn test_warp_finished_event_is_queued() {
    let mut world = FlightWorld::new();
    let profile = Arc::new(PhysicsProfile::default());
    let handle = spawn(&mut world, &profile);

    world.start_special_warp(handle, WarpDirection::In, 2.0).unwrap();
    assert!(world.get_mode(handle).unwrap().special_warp.is_some());

    for _ in 0..150 {
        world.step(1.0 / 60.0);
    }

    assert!(world.get_mode(handle).unwrap().special_warp.is_none());

    let events = world.events().get_flight_events_for_body(handle);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, FlightEventType::WarpFinished);

    // Draining the queue consumes the event
    let event = world.events_mut().next_flight_event().unwrap();
    assert_eq!(event.body, handle);
    assert!(!world.events().has_flight_events());
}

#[test]
fn test_end_special_warp_cancels_without_event() {
    let mut world = FlightWorld::new();
    let profile = Arc::new(PhysicsProfile::default());
    let handle = spawn(&mut world, &profile);

    world.start_special_warp(handle, WarpDirection::In, 10.0).unwrap();
    world.step(1.0 / 60.0);
    world.end_special_warp(handle).unwrap();

    assert!(world.get_mode(handle).unwrap().special_warp.is_none());
    assert!(!world.events().has_flight_events());
}

#[test]
fn test_invalid_warp_duration() {
    let mut world = FlightWorld::new();
    let profile = Arc::new(PhysicsProfile::default());
    let handle = spawn(&mut world, &profile);

    assert!(world.start_special_warp(handle, WarpDirection::In, 0.0).is_err());
    assert!(world.start_special_warp(handle, WarpDirection::In, f32::NAN).is_err());
}

#[test]
fn test_step_clamps_oversized_dt() {
    let mut world = FlightWorld::new();
    let profile = Arc::new(PhysicsProfile::default());
    let handle = spawn(&mut world, &profile);
    world.set_input(handle, ControlInput::forward_only(1.0)).unwrap();

    // A stalled host handing in a huge dt only advances by max_time_step
    world.step(5.0);
    assert_relative_eq!(world.time(), world.config().max_time_step, epsilon = 1.0e-5);
}

#[test]
fn test_get_transform_tracks_motion() {
    let mut world = FlightWorld::new();
    let profile = Arc::new(PhysicsProfile::default());
    let handle = spawn(&mut world, &profile);
    world.set_input(handle, ControlInput::forward_only(1.0)).unwrap();

    for _ in 0..30 {
        world.step(1.0 / 60.0);
    }

    let transform = world.get_transform(handle).unwrap();
    assert_relative_eq!(transform.position.z, world.get_state(handle).unwrap().position.z);
}
