//! Joystick sample produced once per main cycle.

use crate::config::ADC_MAX;

/// Raw joystick deflection from the two ADC channels.
///
/// Both axes are clamped to `[0, ADC_MAX]` on construction, so the mappers can
/// rely on the range without re-checking.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct Sample {
    /// Horizontal axis (ADC1).
    pub x: u16,
    /// Vertical axis (ADC0). Higher means joystick pushed up.
    pub y: u16,
}

impl Sample {
    /// Joystick at rest.
    pub const CENTER: Self = Self::new(crate::config::ADC_CENTER, crate::config::ADC_CENTER);

    /// Create a sample, clamping each axis to the ADC range.
    #[inline]
    pub const fn new(
        x: u16,
        y: u16,
    ) -> Self {
        Self {
            x: clamp_adc(x),
            y: clamp_adc(y),
        }
    }
}

impl Default for Sample {
    fn default() -> Self { Self::CENTER }
}

#[inline]
const fn clamp_adc(raw: u16) -> u16 { if raw > ADC_MAX { ADC_MAX } else { raw } }

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_in_range_values() {
        let sample = Sample::new(0, 4095);
        assert_eq!(sample.x, 0);
        assert_eq!(sample.y, 4095);
    }

    #[test]
    fn test_new_clamps_out_of_range() {
        let sample = Sample::new(5000, u16::MAX);
        assert_eq!(sample.x, ADC_MAX);
        assert_eq!(sample.y, ADC_MAX);
    }

    #[test]
    fn test_default_is_center() {
        assert_eq!(Sample::default(), Sample::new(2048, 2048));
    }
}
