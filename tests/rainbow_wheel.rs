//! Host-level tests for the rainbow's color-wheel math.

use embassy_time::Duration;
use rover_kit::pixel::Rgb;
use rover_kit::rainbow::{WheelCycle, wheel};

const FRAME: Duration = Duration::from_millis(100);
const PERIOD: Duration = Duration::from_secs(2);

#[test]
fn wheel_hits_the_primaries() {
    assert_eq!(wheel(0), Rgb { r: 255, g: 0, b: 0 });
    assert_eq!(wheel(85), Rgb { r: 0, g: 255, b: 0 });
    assert_eq!(wheel(170), Rgb { r: 0, g: 0, b: 255 });
}

#[test]
fn wheel_wraps_around() {
    // Position 255 is one step short of a full revolution.
    assert_eq!(wheel(255), Rgb { r: 255, g: 0, b: 0 });
}

#[test]
fn one_period_walks_the_whole_wheel() {
    // 2 s of 100 ms frames is 20 steps; the Q8.8 walker should be within
    // one hue of its starting position afterwards.
    let mut cycle = WheelCycle::new(FRAME, PERIOD);
    for _ in 0..20 {
        cycle.advance();
    }
    assert_eq!(cycle.position(), 255);

    // The next frame wraps past the origin.
    cycle.advance();
    assert!(cycle.position() < 13);
}

#[test]
fn frames_step_evenly_through_the_hues() {
    let mut cycle = WheelCycle::new(FRAME, PERIOD);
    let mut last = 0;
    for _ in 0..10 {
        cycle.advance();
        let position = cycle.position();
        let step = position - last;
        assert!((12..=13).contains(&step), "uneven step {step}");
        last = position;
    }
}
