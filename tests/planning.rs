//! Host-level tests for the per-behavior planning functions.

use rover_kit::behavior::{Steer, line_follow_inputs, steer_for_distance};

#[test]
fn close_obstacle_turns_left() {
    assert_eq!(steer_for_distance(Some(5.0)), Steer::TurnLeft);
}

#[test]
fn distant_obstacle_drives_straight() {
    assert_eq!(steer_for_distance(Some(15.0)), Steer::Straight);
}

#[test]
fn threshold_itself_is_not_close() {
    // The rule is strictly-less-than.
    assert_eq!(steer_for_distance(Some(10.0)), Steer::Straight);
}

#[test]
fn missing_reading_drives_straight() {
    assert_eq!(steer_for_distance(None), Steer::Straight);
}

#[test]
fn line_levels_pass_through_as_drive_inputs() {
    assert_eq!(line_follow_inputs(true, false), (1.0, 0.0));
    assert_eq!(line_follow_inputs(false, true), (0.0, 1.0));
    assert_eq!(line_follow_inputs(true, true), (1.0, 1.0));
    assert_eq!(line_follow_inputs(false, false), (0.0, 0.0));
}
