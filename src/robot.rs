//! The robot facade: one owner for every peripheral on the rover.
//!
//! Behaviors act on a [`Robot`] instead of touching hardware directly.
//! Pin assignments are fixed in [`Robot::new`].

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::Peripherals;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};

use crate::Result;
use crate::button::{Button, ButtonEvent, ButtonStatic};
use crate::drive::wheel_throttles;
use crate::pixel::Pixel;
use crate::rainbow::Rainbow;
use crate::servo::ContinuousServo;
use crate::sonar::Sonar;

/// Static resources for [`Robot`].
pub struct RobotStatic {
    button: ButtonStatic,
}

/// The rover's peripherals behind one facade.
///
/// Exactly one instance exists; it is built once at startup and lives for
/// the rest of the program.
pub struct Robot {
    line_left: Input<'static>,
    line_right: Input<'static>,
    servo_left: ContinuousServo<'static>,
    servo_right: ContinuousServo<'static>,
    sonar: Sonar<'static>,
    pixel: Pixel,
    rainbow: Rainbow,
    button: Button<'static>,
    /// Onboard status LED, configured as an output. The stock behaviors
    /// leave it alone; sketches are free to use it.
    pub led: Output<'static>,
}

impl Robot {
    /// Create static resources for the robot.
    #[must_use]
    pub const fn new_static() -> RobotStatic {
        RobotStatic {
            button: Button::new_static(),
        }
    }

    /// Take ownership of the board's peripherals and wire up the rover.
    ///
    /// # Errors
    /// Returns an error if the button's background task cannot be spawned.
    pub fn new(
        robot_static: &'static RobotStatic,
        p: Peripherals,
        spawner: Spawner,
    ) -> Result<Self> {
        let line_left = Input::new(p.PIN_10, Pull::None);
        let line_right = Input::new(p.PIN_8, Pull::None);

        let servo_left =
            ContinuousServo::new(Pwm::new_output_a(p.PWM_SLICE0, p.PIN_0, PwmConfig::default()));
        let servo_right =
            ContinuousServo::new(Pwm::new_output_a(p.PWM_SLICE3, p.PIN_6, PwmConfig::default()));

        let sonar = Sonar::new(p.PIN_4, p.PIN_3);
        let pixel = Pixel::new(p.PIO0, p.DMA_CH0, p.PIN_16);
        let rainbow = Rainbow::new();
        let button = Button::new(p.PIN_1, &robot_static.button, spawner)?;
        let led = Output::new(p.PIN_25, Level::Low);

        info!("robot hardware initialized");

        Ok(Self {
            line_left,
            line_right,
            servo_left,
            servo_right,
            sonar,
            pixel,
            rainbow,
            button,
            led,
        })
    }

    /// Command the wheels.
    ///
    /// Inputs are conventionally in [-1, 1] and are not range-checked
    /// here; each servo clamps its own throttle. The per-wheel gains (and
    /// the right wheel's sign flip) are applied on the way through.
    pub fn drive(&mut self, left: f32, right: f32) {
        let (left_throttle, right_throttle) = wheel_throttles(left, right);
        self.servo_left.set_throttle(left_throttle);
        self.servo_right.set_throttle(right_throttle);
    }

    /// Measure the sonar distance in centimeters once.
    ///
    /// A failed reading returns `None` instead of an error: sonar faults
    /// are transient and must never take down the control loop.
    pub async fn read_sonar_distance(&mut self) -> Option<f32> {
        self.sonar.distance_cm().await.ok()
    }

    /// Stop the wheels and blank the pixel.
    ///
    /// Called on every behavior switch so no motion or lighting state
    /// leaks from one behavior into the next.
    pub async fn reset(&mut self) {
        self.drive(0.0, 0.0);
        self.pixel.off().await;
    }

    /// Current (left, right) line-sensor levels.
    #[must_use]
    pub fn line_sensors(&self) -> (bool, bool) {
        (self.line_left.is_high(), self.line_right.is_high())
    }

    /// Advance the rainbow animation one step on the pixel.
    pub async fn animate_rainbow(&mut self) {
        self.rainbow.animate(&mut self.pixel).await;
    }

    /// Take the next queued button event, if any. Never blocks.
    #[must_use]
    pub fn try_next_button_event(&self) -> Option<ButtonEvent> {
        self.button.try_next()
    }
}
