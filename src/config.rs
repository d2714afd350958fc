//! Compile-time configuration for the joystick display firmware.
//!
//! Pin mapping (BitDogLab board):
//! - Joystick X: GPIO27 (ADC1)
//! - Joystick Y: GPIO26 (ADC0)
//! - Joystick press: GPIO22 (active-low, internal pull-up)
//! - Button A: GPIO5 (active-low, internal pull-up)
//! - Red LED: GPIO13 (PWM slice 6, channel B)
//! - Blue LED: GPIO12 (PWM slice 6, channel A)
//! - Green LED: GPIO11 (digital)
//! - SSD1306 display: I2C1, SDA=GPIO14, SCL=GPIO15
//!
//! Pins themselves are bound by peripheral type in the binary; the numbers here
//! are kept for logging and documentation.

// =============================================================================
// Pin Assignments
// =============================================================================

pub const JOYSTICK_X_PIN: u8 = 27;
pub const JOYSTICK_Y_PIN: u8 = 26;
pub const JOYSTICK_BUTTON_PIN: u8 = 22;
pub const BUTTON_A_PIN: u8 = 5;
pub const LED_RED_PIN: u8 = 13;
pub const LED_GREEN_PIN: u8 = 11;
pub const LED_BLUE_PIN: u8 = 12;
pub const I2C_SDA_PIN: u8 = 14;
pub const I2C_SCL_PIN: u8 = 15;

// =============================================================================
// ADC
// =============================================================================

/// Full-scale reading of the 12-bit ADC.
pub const ADC_MAX: u16 = 4095;

/// Reading of an axis at rest.
pub const ADC_CENTER: u16 = 2048;

/// Red LED (X axis) stays dark for readings in `[X_DEADZONE_LOW, X_DEADZONE_HIGH]`.
///
/// The band is narrow and off-center. It matches the calibration of the board
/// this firmware was written for and is kept as-is.
pub const X_DEADZONE_LOW: u16 = 1950;
pub const X_DEADZONE_HIGH: u16 = 2040;

/// Blue LED (Y axis) stays dark for readings in `[Y_DEADZONE_LOW, Y_DEADZONE_HIGH]`.
pub const Y_DEADZONE_LOW: u16 = 2140;
pub const Y_DEADZONE_HIGH: u16 = 2190;

const _: () = assert!(X_DEADZONE_LOW < X_DEADZONE_HIGH);
const _: () = assert!(Y_DEADZONE_LOW < Y_DEADZONE_HIGH);
const _: () = assert!(ADC_CENTER < ADC_MAX);

// =============================================================================
// PWM
// =============================================================================

/// PWM counter top. Duty values above this saturate at full brightness.
pub const PWM_WRAP: u16 = 4095;

/// Integer clock divider applied to the system clock for both LED channels.
pub const PWM_CLOCK_DIVIDER: u8 = 125;

// =============================================================================
// Buttons
// =============================================================================

/// Minimum time between two accepted edges on the same button.
/// An edge is accepted only when strictly more than this has elapsed.
pub const DEBOUNCE_MS: u32 = 200;

// =============================================================================
// Display
// =============================================================================

/// SSD1306 width in pixels.
pub const DISPLAY_WIDTH: u32 = 128;

/// SSD1306 height in pixels.
pub const DISPLAY_HEIGHT: u32 = 64;

/// 7-bit I2C address of the display controller.
pub const DISPLAY_ADDRESS: u8 = 0x3C;

/// I2C bus clock.
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Side length of the square cursor glyph.
pub const CURSOR_SIZE: u32 = 8;

/// Largest X the cursor's top-left corner can take.
pub const CURSOR_MAX_X: u32 = DISPLAY_WIDTH - CURSOR_SIZE;

/// Largest Y the cursor's top-left corner can take.
pub const CURSOR_MAX_Y: u32 = DISPLAY_HEIGHT - CURSOR_SIZE;

const _: () = assert!(CURSOR_SIZE < DISPLAY_WIDTH && CURSOR_SIZE < DISPLAY_HEIGHT);

// =============================================================================
// Timing
// =============================================================================

/// Delay at the end of every main cycle iteration.
pub const SAMPLE_PERIOD_MS: u64 = 50;

/// Minimum interval between two status log lines.
pub const STATUS_LOG_INTERVAL_MS: u32 = 1000;
