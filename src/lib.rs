//! Building blocks for a small two-wheel rover on the Raspberry Pi Pico.
//!
//! Everything on the board (two continuous-rotation servos, an HC-SR04
//! sonar, two line sensors, a WS2812 pixel, a push button, the status
//! LED) is collected behind one `Robot` facade, and a handful of toy
//! behaviors drive it. A button release cycles to the next behavior.
//!
//! The demo programs live in `demos/`; the selection and planning logic
//! is hardware-free and tested on the host (`--features host`).
#![no_std]

pub mod behavior;
pub mod button;
pub mod drive;
mod error;
mod never;
pub mod pixel;
pub mod rainbow;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod robot;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod servo;
pub mod shared_constants;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod sonar;

// Re-export commonly used items
pub use behavior::{Behavior, BehaviorCycle};
pub use button::ButtonEvent;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use button::Button;
pub use error::{Error, Result};
pub use never::Never;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use robot::{Robot, RobotStatic};
