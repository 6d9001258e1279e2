//! The rainbow animation for the status pixel.
//!
//! The color math lives in [`WheelCycle`], which is hardware-free; the
//! `Rainbow` wrapper adds frame pacing and writes to the pixel.

use embassy_time::Duration;
use fixed::types::U8F8;

use crate::pixel::Rgb;

#[cfg(any(feature = "pico1", feature = "pico2"))]
use embassy_time::Instant;

#[cfg(any(feature = "pico1", feature = "pico2"))]
use crate::pixel::Pixel;
#[cfg(any(feature = "pico1", feature = "pico2"))]
use crate::shared_constants::{RAINBOW_FRAME, RAINBOW_PERIOD};

/// A walker around the 256-hue color wheel. One `advance` is one frame.
///
/// The position is Q8.8: the per-frame step (`frame / period` of a full
/// revolution) is fractional.
#[derive(Clone, Debug)]
pub struct WheelCycle {
    position: U8F8,
    step: U8F8,
}

impl WheelCycle {
    /// A cycle that advances `frame / period` of a revolution per step.
    #[must_use]
    pub fn new(frame: Duration, period: Duration) -> Self {
        // 256 hues per revolution, scaled into Q8.8 bits.
        let step_bits = (65_536 * frame.as_micros()) / period.as_micros();
        Self {
            position: U8F8::ZERO,
            step: U8F8::from_bits(step_bits as u16),
        }
    }

    /// Advance one frame and return its color.
    pub fn advance(&mut self) -> Rgb {
        self.position = self.position.wrapping_add(self.step);
        wheel(self.position.to_num::<u8>())
    }

    /// The current wheel position (whole hues).
    #[must_use]
    pub fn position(&self) -> u8 {
        self.position.to_num::<u8>()
    }
}

/// Map a 0-255 wheel position to a color (red -> green -> blue -> red).
#[must_use]
pub fn wheel(pos: u8) -> Rgb {
    let pos = 255 - pos;
    if pos < 85 {
        rgb(255 - pos * 3, 0, pos * 3)
    } else if pos < 170 {
        let pos = pos - 85;
        rgb(0, pos * 3, 255 - pos * 3)
    } else {
        let pos = pos - 170;
        rgb(pos * 3, 255 - pos * 3, 0)
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

/// The rainbow animation generator attached to the status pixel.
///
/// Call [`Rainbow::animate`] as often as you like: frames are paced to one
/// per `RAINBOW_FRAME`, so the full wheel takes `RAINBOW_PERIOD`.
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub struct Rainbow {
    cycle: WheelCycle,
    last_frame: Option<Instant>,
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
impl Rainbow {
    /// A generator with the stock frame and period.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cycle: WheelCycle::new(RAINBOW_FRAME, RAINBOW_PERIOD),
            last_frame: None,
        }
    }

    /// Advance at most one frame onto the pixel.
    pub async fn animate(&mut self, pixel: &mut Pixel) {
        let now = Instant::now();
        if let Some(last) = self.last_frame {
            if now.duration_since(last) < RAINBOW_FRAME {
                return;
            }
        }
        self.last_frame = Some(now);
        let color = self.cycle.advance();
        pixel.write(color).await;
    }
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
impl Default for Rainbow {
    fn default() -> Self {
        Self::new()
    }
}
