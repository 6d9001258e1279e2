//! The rover's selectable behaviors and the button-driven cycle through
//! them.
//!
//! The selection logic and the per-behavior planning are plain functions
//! over plain data, so they can be checked on the host; only the
//! [`Behavior::run`] bodies touch hardware.

use crate::button::ButtonEvent;
use crate::shared_constants::OBSTACLE_THRESHOLD_CM;

#[cfg(any(feature = "pico1", feature = "pico2"))]
use embassy_time::Timer;

#[cfg(any(feature = "pico1", feature = "pico2"))]
use crate::robot::Robot;
#[cfg(any(feature = "pico1", feature = "pico2"))]
use crate::shared_constants::TURN_PAUSE;

/// A self-contained control policy, invoked once per main-loop lap while
/// selected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Behavior {
    /// Rainbow animation on the pixel; ignores every sensor.
    Rainbow,
    /// Drive straight, turning left when the sonar sees something close.
    ObstacleAvoidance,
    /// Naive line follower: sensor levels straight into the wheels.
    LineFollowing,
}

impl Behavior {
    /// Every behavior, in the order the button cycles through them.
    pub const ALL: [Self; 3] = [
        Self::Rainbow,
        Self::ObstacleAvoidance,
        Self::LineFollowing,
    ];

    /// Short name for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rainbow => "rainbow",
            Self::ObstacleAvoidance => "obstacle avoidance",
            Self::LineFollowing => "line following",
        }
    }
}

/// Which behavior is currently selected.
///
/// Starts on the first entry of [`Behavior::ALL`] and advances one step,
/// wrapping around, on every button release.
#[derive(Clone, Debug, Default)]
pub struct BehaviorCycle {
    current: usize,
}

impl BehaviorCycle {
    /// A cycle resting on the first registered behavior.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: 0 }
    }

    /// The currently selected behavior.
    #[must_use]
    pub fn current(&self) -> Behavior {
        Behavior::ALL[self.current]
    }

    /// Feed one button event into the cycle.
    ///
    /// Returns `true` when the selection advanced; the caller is expected
    /// to reset the robot before running the new behavior. Presses never
    /// advance the cycle, only releases do.
    pub fn handle_event(&mut self, event: ButtonEvent) -> bool {
        match event {
            ButtonEvent::Released => {
                self.current = (self.current + 1) % Behavior::ALL.len();
                true
            }
            ButtonEvent::Pressed => false,
        }
    }
}

/// Obstacle-avoidance steering decision for one sonar reading.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Steer {
    /// Nothing close (or no reading): keep driving forward.
    Straight,
    /// Something within the threshold: commit to a left turn.
    TurnLeft,
}

/// Decide the steering for a sonar reading, `None` meaning "no echo".
///
/// A missing reading is treated the same as open space ahead.
#[must_use]
pub fn steer_for_distance(distance_cm: Option<f32>) -> Steer {
    match distance_cm {
        Some(distance) if distance < OBSTACLE_THRESHOLD_CM => Steer::TurnLeft,
        _ => Steer::Straight,
    }
}

/// Line-sensor levels passed straight through as drive inputs.
#[must_use]
pub fn line_follow_inputs(left: bool, right: bool) -> (f32, f32) {
    (f32::from(u8::from(left)), f32::from(u8::from(right)))
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
impl Behavior {
    /// Run one lap of this behavior on the robot.
    pub async fn run(self, robot: &mut Robot) {
        match self {
            Self::Rainbow => robot.animate_rainbow().await,
            Self::ObstacleAvoidance => obstacle_avoidance(robot).await,
            Self::LineFollowing => {
                let (left, right) = robot.line_sensors();
                let (left_input, right_input) = line_follow_inputs(left, right);
                robot.drive(left_input, right_input);
            }
        }
    }
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
async fn obstacle_avoidance(robot: &mut Robot) {
    let distance = robot.read_sonar_distance().await;
    match steer_for_distance(distance) {
        Steer::TurnLeft => {
            robot.drive(-1.0, 1.0);
            // Hold the turn; button events queue up in the meantime.
            Timer::after(TURN_PAUSE).await;
        }
        Steer::Straight => robot.drive(1.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::{Behavior, BehaviorCycle, ButtonEvent};

    #[test]
    fn cycle_wraps_modulo_registry_length() {
        let mut cycle = BehaviorCycle::new();
        for _ in 0..Behavior::ALL.len() {
            cycle.handle_event(ButtonEvent::Released);
        }
        assert_eq!(cycle.current(), Behavior::Rainbow);
    }

    #[test]
    fn press_is_not_a_transition() {
        let mut cycle = BehaviorCycle::new();
        assert!(!cycle.handle_event(ButtonEvent::Pressed));
        assert_eq!(cycle.current(), Behavior::Rainbow);
    }
}
