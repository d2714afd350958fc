//! Joystick display library - testable modules for the joystick firmware.
//!
//! This library contains the core logic that can be tested on the host machine.
//! The binary (`main.rs`) uses this library and adds the embedded-specific code.
//!
//! - [`config`]: Pins, thresholds, display geometry, timing
//! - [`sample`]: Joystick sample type
//! - [`state`]: Shared device state and the debounced toggle handler
//! - [`brightness`]: Deflection to LED duty mapping
//! - [`render`]: Cursor mapping and frame drawing
//! - [`cycle`]: One main cycle iteration without the hardware
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod brightness;
pub mod config;
pub mod cycle;
pub mod render;
pub mod sample;
pub mod state;

pub use brightness::{LedDuty, map_brightness};
pub use cycle::{CycleOutput, StatusTimer, plan_cycle};
pub use render::RenderFrame;
pub use sample::Sample;
pub use state::{BorderThickness, Line, SharedState, StateSnapshot, Toggle};
