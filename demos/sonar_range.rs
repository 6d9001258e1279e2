//! Log HC-SR04 distance readings once a second.
#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::Timer;
use panic_probe as _;
use rover_kit::sonar::Sonar;

#[embassy_executor::main]
pub async fn main(_spawner: Spawner) -> ! {
    let p = embassy_rp::init(Default::default());

    let mut sonar = Sonar::new(p.PIN_4, p.PIN_3);

    loop {
        match sonar.distance_cm().await {
            Ok(distance) => info!("distance: {} cm", distance),
            Err(_) => info!("no echo"),
        }
        Timer::after_secs(1).await;
    }
}
