//! Joystick deflection to LED brightness mapping.
//!
//! The red LED follows the X axis and the blue LED the Y axis. Brightness is the
//! distance of the axis from [`ADC_CENTER`], used as a raw PWM compare value
//! against a counter top of [`PWM_WRAP`]. Each axis has its own deadband around
//! rest; inside it the LED is dark.

use crate::config::{
    ADC_CENTER,
    PWM_WRAP,
    X_DEADZONE_HIGH,
    X_DEADZONE_LOW,
    Y_DEADZONE_HIGH,
    Y_DEADZONE_LOW,
};
use crate::sample::Sample;

/// Inclusive range of raw readings treated as "no signal".
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Deadband {
    pub low: u16,
    pub high: u16,
}

impl Deadband {
    /// X axis (red LED).
    pub const X: Self = Self {
        low: X_DEADZONE_LOW,
        high: X_DEADZONE_HIGH,
    };

    /// Y axis (blue LED).
    pub const Y: Self = Self {
        low: Y_DEADZONE_LOW,
        high: Y_DEADZONE_HIGH,
    };

    /// Whether `raw` falls inside the band.
    #[inline]
    pub const fn contains(
        self,
        raw: u16,
    ) -> bool {
        raw >= self.low && raw <= self.high
    }
}

/// PWM compare values for the two dimmed LEDs.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct LedDuty {
    pub red: u16,
    pub blue: u16,
}

impl LedDuty {
    /// Both LEDs dark.
    pub const OFF: Self = Self { red: 0, blue: 0 };
}

/// Absolute distance of a reading from rest.
#[inline]
pub const fn deflection(raw: u16) -> u16 { raw.abs_diff(ADC_CENTER) }

/// Duty for one axis: zero inside its deadband, deflection otherwise.
///
/// A 12-bit reading deflects at most 2048, below [`PWM_WRAP`]; the clamp only
/// bites for raw values outside the ADC range.
#[inline]
fn axis_duty(
    raw: u16,
    band: Deadband,
) -> u16 {
    if band.contains(raw) { 0 } else { deflection(raw).min(PWM_WRAP) }
}

/// Map a sample to LED duties. Disabled LEDs are always dark.
pub fn map_brightness(
    sample: Sample,
    leds_enabled: bool,
) -> LedDuty {
    if !leds_enabled {
        return LedDuty::OFF;
    }

    LedDuty {
        red: axis_duty(sample.x, Deadband::X),
        blue: axis_duty(sample.y, Deadband::Y),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
