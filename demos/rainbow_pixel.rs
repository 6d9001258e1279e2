//! Run the rainbow animation on the onboard WS2812 pixel.
#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::Timer;
use panic_probe as _;
use rover_kit::pixel::Pixel;
use rover_kit::rainbow::Rainbow;

#[embassy_executor::main]
pub async fn main(_spawner: Spawner) -> ! {
    info!("Starting rainbow pixel demo");
    let p = embassy_rp::init(Default::default());

    let mut pixel = Pixel::new(p.PIO0, p.DMA_CH0, p.PIN_16);
    let mut rainbow = Rainbow::new();

    loop {
        rainbow.animate(&mut pixel).await;
        Timer::after_millis(10).await;
    }
}
