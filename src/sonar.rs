//! A device abstraction for the HC-SR04 ultrasonic ranger.

use derive_more::derive::{Display, Error};
use embassy_rp::Peri;
use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
use embassy_time::{Duration, Instant, Timer, with_timeout};

/// Longest wait for the echo pulse to begin after a trigger.
const ECHO_START_TIMEOUT: Duration = Duration::from_millis(100);
/// Longest echo pulse accepted as a reading (~4 m of range).
const ECHO_TIMEOUT: Duration = Duration::from_millis(30);
/// Microseconds of echo per centimeter of distance (round trip).
const US_PER_CM: f32 = 58.0;

/// A failed ranging attempt.
///
/// Expected and transient: open space in front of the sensor produces one.
#[derive(Copy, Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum EchoError {
    /// The echo pulse never started.
    #[display("no echo pulse received")]
    NoPulse,
    /// The echo pulse did not end within range.
    #[display("echo pulse did not end")]
    NoEcho,
}

/// An HC-SR04 ultrasonic ranger on a trigger/echo pin pair.
pub struct Sonar<'d> {
    trigger: Output<'d>,
    echo: Input<'d>,
}

impl<'d> Sonar<'d> {
    /// Create a new sonar from its trigger and echo pins.
    pub fn new(trigger: Peri<'d, impl Pin>, echo: Peri<'d, impl Pin>) -> Self {
        Self {
            trigger: Output::new(trigger, Level::Low),
            echo: Input::new(echo, Pull::None),
        }
    }

    /// Measure the distance in centimeters once.
    ///
    /// # Errors
    /// Returns an [`EchoError`] when no echo comes back in time.
    pub async fn distance_cm(&mut self) -> Result<f32, EchoError> {
        // A 10 µs high pulse on the trigger starts one measurement cycle.
        self.trigger.set_low();
        Timer::after_micros(2).await;
        self.trigger.set_high();
        Timer::after_micros(10).await;
        self.trigger.set_low();

        with_timeout(ECHO_START_TIMEOUT, self.echo.wait_for_high())
            .await
            .map_err(|_| EchoError::NoPulse)?;
        let echo_start = Instant::now();
        with_timeout(ECHO_TIMEOUT, self.echo.wait_for_low())
            .await
            .map_err(|_| EchoError::NoEcho)?;
        let echo_us = echo_start.elapsed().as_micros();

        Ok(echo_us as f32 / US_PER_CM)
    }
}
