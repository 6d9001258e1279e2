//! A device abstraction for the rover's single WS2812 status pixel.

use smart_leds::RGB8;
/// RGB color constants re-exported from `smart_leds`.
pub use smart_leds::colors;

/// RGB color representation re-exported from `smart_leds`.
pub type Rgb = RGB8;

#[cfg(any(feature = "pico1", feature = "pico2"))]
use embassy_rp::Peri;
#[cfg(any(feature = "pico1", feature = "pico2"))]
use embassy_rp::bind_interrupts;
#[cfg(any(feature = "pico1", feature = "pico2"))]
use embassy_rp::peripherals::{DMA_CH0, PIO0};
#[cfg(any(feature = "pico1", feature = "pico2"))]
use embassy_rp::pio::{InterruptHandler, Pio, PioPin};
#[cfg(any(feature = "pico1", feature = "pico2"))]
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812, PioWs2812Program};
#[cfg(any(feature = "pico1", feature = "pico2"))]
use static_cell::StaticCell;

#[cfg(any(feature = "pico1", feature = "pico2"))]
use crate::shared_constants::PIXEL_BRIGHTNESS;

#[cfg(any(feature = "pico1", feature = "pico2"))]
bind_interrupts!(pub struct Pio0Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

#[cfg(any(feature = "pico1", feature = "pico2"))]
static WS2812_PROGRAM: StaticCell<PioWs2812Program<'static, PIO0>> = StaticCell::new();

/// The onboard WS2812 pixel, driven by PIO0 over DMA.
///
/// A `write` scales the color by the fixed brightness budget and flushes
/// it in one call; there is no separate latch step.
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub struct Pixel {
    driver: PioWs2812<'static, PIO0, 0, 1, Grb>,
    _common: embassy_rp::pio::Common<'static, PIO0>,
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
impl Pixel {
    /// Create the pixel driver on PIO0 / SM0.
    ///
    /// Can only be called once: the loaded PIO program lives in a static
    /// cell.
    pub fn new(
        pio: Peri<'static, PIO0>,
        dma: Peri<'static, DMA_CH0>,
        pin: Peri<'static, impl PioPin>,
    ) -> Self {
        let Pio { mut common, sm0, .. } = Pio::new(pio, Pio0Irqs);
        let program = WS2812_PROGRAM.init(PioWs2812Program::new(&mut common));
        let driver = PioWs2812::new(&mut common, sm0, dma, pin, program);
        Self {
            driver,
            _common: common,
        }
    }

    /// Write one color to the pixel (set + flush).
    pub async fn write(&mut self, color: Rgb) {
        let scaled = Rgb {
            r: scale_brightness(color.r, PIXEL_BRIGHTNESS),
            g: scale_brightness(color.g, PIXEL_BRIGHTNESS),
            b: scale_brightness(color.b, PIXEL_BRIGHTNESS),
        };
        self.driver.write(&[scaled]).await;
    }

    /// Blank the pixel.
    pub async fn off(&mut self) {
        self.write(colors::BLACK).await;
    }
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
#[inline]
fn scale_brightness(value: u8, brightness: u8) -> u8 {
    ((u16::from(value) * u16::from(brightness)) / 255) as u8
}
