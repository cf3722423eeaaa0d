use crate::core::BodyHandle;
use std::collections::VecDeque;

/// Types of body lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEventType {
    /// A body has been added to the world
    Added,

    /// A body has been removed from the world
    Removed,
}

/// An event related to a single body's lifecycle
#[derive(Debug, Clone)]
pub struct BodyEvent {
    /// The type of body event
    pub event_type: BodyEventType,

    /// The body that the event refers to
    pub body: BodyHandle,
}

/// Types of flight-mode events produced by the simulation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightEventType {
    /// A scripted warp transition ran its full duration
    WarpFinished,
}

/// A flight-mode event for a single body
#[derive(Debug, Clone)]
pub struct FlightEvent {
    /// The type of flight event
    pub event_type: FlightEventType,

    /// The body that the event refers to
    pub body: BodyHandle,
}

/// A queue of simulation events, drained by the host loop each tick
#[derive(Debug, Default)]
pub struct EventQueue {
    /// Body lifecycle events
    body_events: VecDeque<BodyEvent>,

    /// Flight-mode events
    flight_events: VecDeque<FlightEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            body_events: VecDeque::new(),
            flight_events: VecDeque::new(),
        }
    }

    /// Adds a body event to the queue
    pub fn add_body_event(&mut self, event: BodyEvent) {
        self.body_events.push_back(event);
    }

    /// Adds a flight event to the queue
    pub fn add_flight_event(&mut self, event: FlightEvent) {
        self.flight_events.push_back(event);
    }

    /// Gets the next body event from the queue
    pub fn next_body_event(&mut self) -> Option<BodyEvent> {
        self.body_events.pop_front()
    }

    /// Gets the next flight event from the queue
    pub fn next_flight_event(&mut self) -> Option<FlightEvent> {
        self.flight_events.pop_front()
    }

    /// Returns whether there are any body events in the queue
    pub fn has_body_events(&self) -> bool {
        !self.body_events.is_empty()
    }

    /// Returns whether there are any flight events in the queue
    pub fn has_flight_events(&self) -> bool {
        !self.flight_events.is_empty()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.body_events.is_empty() && self.flight_events.is_empty()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.body_events.clear();
        self.flight_events.clear();
    }

    /// Gets all flight events involving a specific body
    pub fn get_flight_events_for_body(&self, body: BodyHandle) -> Vec<&FlightEvent> {
        self.flight_events.iter().filter(|e| e.body == body).collect()
    }

    /// Gets all body events of a specific type
    pub fn get_body_events_of_type(&self, event_type: BodyEventType) -> Vec<&BodyEvent> {
        self.body_events
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }
}
