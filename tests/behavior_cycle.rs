//! Host-level tests for the button-driven behavior cycle.

use rover_kit::behavior::{Behavior, BehaviorCycle};
use rover_kit::button::ButtonEvent;

#[test]
fn starts_on_first_registered_behavior() {
    let cycle = BehaviorCycle::new();
    assert_eq!(cycle.current(), Behavior::ALL[0]);
}

#[test]
fn release_advances_in_registry_order() {
    let mut cycle = BehaviorCycle::new();

    assert!(cycle.handle_event(ButtonEvent::Released));
    assert_eq!(cycle.current(), Behavior::ObstacleAvoidance);

    assert!(cycle.handle_event(ButtonEvent::Released));
    assert_eq!(cycle.current(), Behavior::LineFollowing);

    assert!(cycle.handle_event(ButtonEvent::Released));
    assert_eq!(cycle.current(), Behavior::Rainbow);
}

#[test]
fn k_releases_land_on_k_mod_n() {
    let n = Behavior::ALL.len();
    for k in 0..25 {
        let mut cycle = BehaviorCycle::new();
        for _ in 0..k {
            cycle.handle_event(ButtonEvent::Released);
        }
        assert_eq!(cycle.current(), Behavior::ALL[k % n], "after {k} releases");
    }
}

#[test]
fn presses_alone_never_advance() {
    let mut cycle = BehaviorCycle::new();
    for _ in 0..10 {
        assert!(!cycle.handle_event(ButtonEvent::Pressed));
    }
    assert_eq!(cycle.current(), Behavior::Rainbow);
}

#[test]
fn transition_is_reported_exactly_on_release() {
    // The demo loop resets the robot whenever `handle_event` reports a
    // transition, so "reset happens between behaviors" reduces to this.
    let mut cycle = BehaviorCycle::new();
    assert!(!cycle.handle_event(ButtonEvent::Pressed));
    assert!(cycle.handle_event(ButtonEvent::Released));
    assert!(!cycle.handle_event(ButtonEvent::Pressed));
    assert!(cycle.handle_event(ButtonEvent::Released));
}
