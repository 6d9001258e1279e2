//! Three-behavior rover demo.
//!
//! A button click (release, to be precise) cycles between a rainbow
//! animation, obstacle avoidance, and line following. The robot is reset
//! on every switch so nothing carries over from the previous behavior.
#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use panic_probe as _;
use rover_kit::behavior::BehaviorCycle;
use rover_kit::robot::{Robot, RobotStatic};
use rover_kit::{Never, Result};

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    match inner_main(spawner).await {
        Err(err) => core::panic!("{err}"),
        Ok(never) => match never {},
    }
}

async fn inner_main(spawner: Spawner) -> Result<Never> {
    info!("Starting rover behaviors demo");
    let p = embassy_rp::init(Default::default());

    static ROBOT_STATIC: RobotStatic = Robot::new_static();
    let mut robot = Robot::new(&ROBOT_STATIC, p, spawner)?;

    let mut cycle = BehaviorCycle::new();
    info!("behavior: {=str}", cycle.current().name());

    loop {
        // A release advances the cycle; quiet the robot before the next
        // behavior takes over.
        if let Some(event) = robot.try_next_button_event() {
            if cycle.handle_event(event) {
                robot.reset().await;
                info!("behavior: {=str}", cycle.current().name());
            }
        }

        cycle.current().run(&mut robot).await;

        // Give the button task a chance to run.
        yield_now().await;
    }
}
