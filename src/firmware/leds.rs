//! PWM-dimmed red and blue LEDs.
//!
//! Both LEDs sit on PWM slice 6:
//! - Blue: GPIO12, channel A
//! - Red: GPIO13, channel B
//!
//! The slice counts to [`PWM_WRAP`] with the system clock divided by
//! [`PWM_CLOCK_DIVIDER`]. A duty is written as the raw compare value.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use joystick_display::LedDuty;
use joystick_display::config::{PWM_CLOCK_DIVIDER, PWM_WRAP};

/// Slice configuration for the LED channels, both starting dark.
pub fn led_pwm_config() -> PwmConfig {
    let mut config = PwmConfig::default();
    config.top = PWM_WRAP;
    config.divider = PWM_CLOCK_DIVIDER.into();
    config.compare_a = 0;
    config.compare_b = 0;
    config
}

/// Owns the PWM slice and its current compare values.
pub struct LedPwm {
    pwm: Pwm<'static>,
    config: PwmConfig,
}

impl LedPwm {
    /// Wrap a slice created with [`led_pwm_config`].
    pub fn new(pwm: Pwm<'static>) -> Self {
        Self {
            pwm,
            config: led_pwm_config(),
        }
    }

    /// Write both compare registers.
    pub fn set_duty(
        &mut self,
        duty: LedDuty,
    ) {
        if self.config.compare_a == duty.blue && self.config.compare_b == duty.red {
            return;
        }
        self.config.compare_a = duty.blue;
        self.config.compare_b = duty.red;
        self.pwm.set_config(&self.config);
    }
}
