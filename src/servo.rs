//! Hardware-PWM continuous-rotation servo driver (FS90R-style) for the
//! Pico using Embassy.
//! - 50 Hz frame (20 ms)
//! - Clock-independent: computes divider from clk_sys so 1 tick ≈ 1 µs
//! - Updates duty WITHOUT reconfiguring the slice timing

use defmt::info;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config, Pwm};

use crate::drive::throttle_to_pulse_us;

pub const SERVO_PERIOD_US: u16 = 20_000; // 20 ms

/// A continuous-rotation servo on channel A of a PWM slice.
///
/// The throttle is a signed fraction of full speed: 0 stops the wheel,
/// +1 and -1 spin it at full speed in opposite directions.
pub struct ContinuousServo<'d> {
    pwm: Pwm<'d>,
    cfg: Config, // Stored so duty updates keep the divider intact
    top: u16,
}

impl<'d> ContinuousServo<'d> {
    /// Create on a PWM output, accepting a pre-configured `Pwm`.
    /// e.g.: `ContinuousServo::new(Pwm::new_output_a(p.PWM_SLICE0, p.PIN_0, Config::default()))`
    pub fn new(mut pwm: Pwm<'d>) -> Self {
        let clk = clk_sys_freq() as u64; // Hz
        // Aim for tick ≈ 1 µs: divider = clk_sys / 1_000_000 (with /16 fractional)
        let mut div_int = (clk / 1_000_000).clamp(1, 255) as u16;
        let rem = clk.saturating_sub(div_int as u64 * 1_000_000);
        let mut div_frac = ((rem * 16 + 500_000) / 1_000_000).clamp(0, 15) as u8;
        if div_frac == 16 {
            div_frac = 0;
            div_int = (div_int + 1).min(255);
        }

        let top = SERVO_PERIOD_US - 1; // 19999 -> 20_000 ticks/frame

        let mut cfg = Config::default();
        cfg.top = top;
        cfg.phase_correct = false; // edge-aligned => exact 1 µs steps
        // Apply divider: use the integer part as u8 which has a From impl
        cfg.divider = (div_int as u8).into();
        cfg.compare_a = throttle_to_pulse_us(0.0);
        cfg.enable = true;
        pwm.set_config(&cfg);

        info!("servo clk={}Hz div={}.{} top={}", clk, div_int, div_frac, top);

        Self { pwm, cfg, top }
    }

    /// Stop the wheel (neutral pulse).
    pub fn stop(&mut self) {
        self.set_throttle(0.0);
    }

    /// Command a throttle in [-1, 1]; out-of-range values are clamped.
    pub fn set_throttle(&mut self, throttle: f32) {
        self.set_pulse_us(throttle_to_pulse_us(throttle));
    }

    /// Set raw pulse width in microseconds (clamped to the frame).
    /// NOTE: only update the *compare* register; do not reconfigure the slice.
    fn set_pulse_us(&mut self, mut us: u16) {
        if us > self.top {
            us = self.top;
        }
        self.cfg.compare_a = us;
        self.pwm.set_config(&self.cfg);
    }
}
