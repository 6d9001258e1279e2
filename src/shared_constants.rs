//! Tuned constants shared across the rover's modules.

use embassy_time::Duration;

/// Gain applied to the left wheel's drive input.
pub const LEFT_WHEEL_GAIN: f32 = 0.1;
/// Gain applied to the right wheel's drive input. Sign-inverted: the right
/// servo is mounted mirrored to the left one.
pub const RIGHT_WHEEL_GAIN: f32 = -0.15;

/// Distance below which obstacle avoidance commits to a turn.
pub const OBSTACLE_THRESHOLD_CM: f32 = 10.0;
/// How long obstacle avoidance holds a turn before reading the sonar again.
pub const TURN_PAUSE: Duration = Duration::from_millis(300);

/// Minimum time between rainbow animation frames.
pub const RAINBOW_FRAME: Duration = Duration::from_millis(100);
/// Time for the rainbow animation to walk the whole color wheel once.
pub const RAINBOW_PERIOD: Duration = Duration::from_secs(2);
/// Brightness budget for the onboard pixel, out of 255.
pub const PIXEL_BRIGHTNESS: u8 = 25;

/// Pause that lets the button's contacts settle after an edge.
pub const BUTTON_DEBOUNCE_DELAY: Duration = Duration::from_millis(10);
/// How many button events may queue up while a behavior blocks the loop.
pub const BUTTON_EVENT_CAPACITY: usize = 8;
