//! Joystick Display Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Reads a two-axis joystick and two buttons, dims a red and a blue LED with
//! the joystick deflection, and draws a cursor with a border on an SSD1306
//! 128x64 display.
//!
//! # Architecture
//!
//! - Main task: sample → LED duties → frame → flush → 50 ms sleep, forever
//! - Edge tasks: one per button, wake on a falling edge (GPIO interrupt) and
//!   update the shared state through the debounced toggle handler
//!
//! # Button Controls
//!
//! - **Joystick press**: Toggle green LED and border thickness (thin/thick)
//! - **A**: Enable/disable the red and blue LEDs
//!
//! On non-ARM targets only the library is meaningful; this binary compiles to
//! an empty `main` so `cargo test` works on the host.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[cfg(target_arch = "arm")]
mod firmware;

#[cfg(target_arch = "arm")]
#[embassy_executor::main]
async fn main(spawner: embassy_executor::Spawner) { firmware::run(spawner).await }

#[cfg(not(target_arch = "arm"))]
fn main() {}
