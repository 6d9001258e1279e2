//! Host-level tests for the throttle and pulse-width arithmetic.

use rover_kit::behavior::line_follow_inputs;
use rover_kit::drive::{throttle_to_pulse_us, wheel_throttles};

#[test]
fn straight_drive_applies_both_gains() {
    let (left, right) = wheel_throttles(1.0, 1.0);
    assert_eq!(left, 0.1);
    assert_eq!(right, -0.15);
}

#[test]
fn zero_inputs_stop_both_wheels() {
    let (left, right) = wheel_throttles(0.0, 0.0);
    assert_eq!(left, 0.0);
    assert_eq!(right, 0.0);
    assert_eq!(throttle_to_pulse_us(left), 1500);
    assert_eq!(throttle_to_pulse_us(right), 1500);
}

#[test]
fn line_follow_left_only_moves_left_wheel() {
    // Left sensor high, right sensor low: 0.1 on the left wheel, a true
    // zero on the right (the inverted gain times zero is still zero).
    let (left_input, right_input) = line_follow_inputs(true, false);
    let (left, right) = wheel_throttles(left_input, right_input);
    assert_eq!(left, 0.1);
    assert_eq!(right, 0.0);
}

#[test]
fn turn_command_counter_rotates_the_wheels() {
    let (left, right) = wheel_throttles(-1.0, 1.0);
    assert_eq!(left, -0.1);
    assert_eq!(right, -0.15);
    // Both pulses end up on the same side of neutral: with the right
    // servo mounted mirrored, that spins the wheels in opposite
    // directions on the ground.
    assert!(throttle_to_pulse_us(left) < 1500);
    assert!(throttle_to_pulse_us(right) < 1500);
}

#[test]
fn pulse_width_scales_linearly() {
    assert_eq!(throttle_to_pulse_us(0.1), 1550);
    assert_eq!(throttle_to_pulse_us(-0.15), 1425);
    assert_eq!(throttle_to_pulse_us(1.0), 2000);
    assert_eq!(throttle_to_pulse_us(-1.0), 1000);
}
