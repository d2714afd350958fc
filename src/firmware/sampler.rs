//! Joystick input sampler on the RP2350 ADC.
//!
//! - X: GPIO27 (ADC1)
//! - Y: GPIO26 (ADC0)

use defmt::{Debug2Format, warn};
use embassy_rp::adc::{Adc, Async, Channel};
use joystick_display::Sample;

/// Reads both joystick axes each cycle.
pub struct JoystickSampler {
    adc: Adc<'static, Async>,
    x: Channel<'static>,
    y: Channel<'static>,
    last: Sample,
}

impl JoystickSampler {
    pub fn new(
        adc: Adc<'static, Async>,
        x: Channel<'static>,
        y: Channel<'static>,
    ) -> Self {
        Self {
            adc,
            x,
            y,
            last: Sample::CENTER,
        }
    }

    /// Convert X then Y.
    ///
    /// A failed conversion keeps that axis at its previous value.
    pub async fn read(&mut self) -> Sample {
        let x = match self.adc.read(&mut self.x).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("ADC X conversion failed: {}", Debug2Format(&e));
                self.last.x
            }
        };
        let y = match self.adc.read(&mut self.y).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("ADC Y conversion failed: {}", Debug2Format(&e));
                self.last.y
            }
        };

        self.last = Sample::new(x, y);
        self.last
    }
}
