//! Button edge tasks.
//!
//! Each button has its own task parked on `wait_for_falling_edge()`. The GPIO
//! interrupt wakes it, the task timestamps the edge and hands it to
//! [`SharedState::on_falling_edge`]. Nothing here blocks; the main cycle sees
//! the change on its next iteration.

use defmt::info;
use embassy_rp::gpio::{Input, Output};
use joystick_display::{Line, SharedState, Toggle};

use super::now_ms;

/// Joystick press: toggles the green LED and the border thickness.
#[embassy_executor::task]
pub async fn joystick_button_task(
    mut button: Input<'static>,
    mut green_led: Output<'static>,
    state: &'static SharedState,
) {
    info!("Joystick button task started (GPIO{})", Line::JoystickButton.pin());

    loop {
        button.wait_for_falling_edge().await;

        if let Some(Toggle::Joystick { green_led_on, border }) = state.on_falling_edge(Line::JoystickButton, now_ms()) {
            if green_led_on {
                green_led.set_high();
            } else {
                green_led.set_low();
            }
            info!("Joystick: green {}, border {}", if green_led_on { "ON" } else { "OFF" }, border);
        }
    }
}

/// Button A: enables or disables the dimmed LEDs.
#[embassy_executor::task]
pub async fn button_a_task(
    mut button: Input<'static>,
    state: &'static SharedState,
) {
    info!("Button A task started (GPIO{})", Line::ButtonA.pin());

    loop {
        button.wait_for_falling_edge().await;

        if let Some(Toggle::LedsEnabled(enabled)) = state.on_falling_edge(Line::ButtonA, now_ms()) {
            info!("LEDs: {}", if enabled { "ENABLED" } else { "DISABLED" });
        }
    }
}
