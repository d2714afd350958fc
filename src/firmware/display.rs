//! SSD1306 128x64 display on I2C1.
//!
//! Pin mapping (BitDogLab):
//! - SDA: GPIO14
//! - SCL: GPIO15
//! - Address: 0x3C
//!
//! The controller is driven in async buffered graphics mode: frames are drawn
//! into the driver's RAM buffer, then pushed with an interrupt-driven I2C
//! transfer. The executor keeps polling the edge tasks while `flush` awaits.

use defmt::{Debug2Format, Format, info, warn};
use embassy_rp::i2c::{Async, Config as I2cConfig, I2c};
use embassy_rp::peripherals::I2C1;
use joystick_display::RenderFrame;
use joystick_display::config::{DISPLAY_ADDRESS, I2C_FREQUENCY_HZ};
use ssd1306::mode::BufferedGraphicsModeAsync;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306Async};

type Ssd1306Display = Ssd1306Async<
    I2CInterface<I2c<'static, I2C1, Async>>,
    DisplaySize128x64,
    BufferedGraphicsModeAsync<DisplaySize128x64>,
>;

/// I2C configuration for the SSD1306 (fast mode, 400 kHz).
pub fn display_i2c_config() -> I2cConfig {
    let mut config = I2cConfig::default();
    config.frequency = I2C_FREQUENCY_HZ;
    config
}

/// Display bring-up failure. The firmware cannot run without the display.
#[derive(Clone, Copy, Debug, Format)]
pub enum StartupError {
    /// Controller did not acknowledge the init sequence.
    DisplayInit,
    /// Blank frame after init could not be sent.
    DisplayClear,
}

/// Buffered SSD1306 with the frame presentation step of the main cycle.
pub struct Screen {
    display: Ssd1306Display,
}

impl Screen {
    /// Initialize the controller and push one blank frame.
    pub async fn init(i2c: I2c<'static, I2C1, Async>) -> Result<Self, StartupError> {
        let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_ADDRESS);
        let mut display =
            Ssd1306Async::new(interface, DisplaySize128x64, DisplayRotation::Rotate0).into_buffered_graphics_mode();

        display.init().await.map_err(|e| {
            warn!("SSD1306 init failed at {=u8:#x}: {}", DISPLAY_ADDRESS, Debug2Format(&e));
            StartupError::DisplayInit
        })?;

        display.clear_buffer();
        display.flush().await.map_err(|e| {
            warn!("SSD1306 first flush failed: {}", Debug2Format(&e));
            StartupError::DisplayClear
        })?;

        info!("SSD1306 ready at {=u8:#x}", DISPLAY_ADDRESS);
        Ok(Self { display })
    }

    /// Draw `frame` into the buffer and send it to the controller.
    ///
    /// Failures are logged and the frame is dropped; the next cycle retries.
    pub async fn present(
        &mut self,
        frame: &RenderFrame,
    ) {
        if let Err(e) = frame.draw(&mut self.display) {
            warn!("Frame draw failed: {}", Debug2Format(&e));
            return;
        }
        if let Err(e) = self.display.flush().await {
            warn!("Display flush failed: {}", Debug2Format(&e));
        }
    }
}
