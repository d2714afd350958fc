//! Device state shared between the button edge handlers and the main cycle.
//!
//! [`SharedState`] has one writer path ([`SharedState::on_falling_edge`], run
//! from the edge tasks) and one reader path ([`SharedState::snapshot`], run once
//! per main cycle iteration). Every field is a separate word-sized atomic
//! accessed with plain loads and stores, so it also works on cores without
//! compare-and-swap (RP2040).
//!
//! # Debounce
//!
//! Each button keeps the timestamp of its last accepted edge. A new edge is
//! accepted only if strictly more than [`DEBOUNCE_MS`] elapsed since then.
//! Timestamps are `u32` milliseconds since boot and compared with wrapping
//! arithmetic. Both timestamps start at 0, so edges during the first
//! [`DEBOUNCE_MS`] after boot are ignored.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::config::{BUTTON_A_PIN, DEBOUNCE_MS, JOYSTICK_BUTTON_PIN};

// =============================================================================
// Border Thickness
// =============================================================================

/// Number of concentric outlines drawn around the display edge.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum BorderThickness {
    /// Two outlines.
    #[default]
    Thin,
    /// Four outlines.
    Thick,
}

impl BorderThickness {
    /// Switch to the other thickness.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Thin => Self::Thick,
            Self::Thick => Self::Thin,
        }
    }

    /// Border width in pixels (one outline per pixel).
    #[inline]
    pub const fn pixels(self) -> u32 {
        match self {
            Self::Thin => 2,
            Self::Thick => 4,
        }
    }

    #[inline]
    const fn from_thick(thick: bool) -> Self { if thick { Self::Thick } else { Self::Thin } }

    #[inline]
    const fn is_thick(self) -> bool { matches!(self, Self::Thick) }
}

// =============================================================================
// Input Lines and Toggle Events
// =============================================================================

/// Monitored digital input that fired a falling edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Line {
    /// Joystick push switch. Toggles the green LED and the border thickness.
    JoystickButton,
    /// Button A. Enables or disables the dimmed LEDs.
    ButtonA,
}

impl Line {
    /// GPIO number of this line.
    pub const fn pin(self) -> u8 {
        match self {
            Self::JoystickButton => JOYSTICK_BUTTON_PIN,
            Self::ButtonA => BUTTON_A_PIN,
        }
    }
}

/// State change caused by an accepted edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Toggle {
    /// Joystick press accepted. The green LED output must be set to `green_led_on`.
    Joystick {
        green_led_on: bool,
        border: BorderThickness,
    },
    /// Button A press accepted.
    LedsEnabled(bool),
}

/// Copy of the observable state, read once per main cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct StateSnapshot {
    pub leds_enabled: bool,
    pub green_led_on: bool,
    pub border: BorderThickness,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            leds_enabled: true,
            green_led_on: false,
            border: BorderThickness::Thin,
        }
    }
}

// =============================================================================
// Shared State
// =============================================================================

/// Interrupt-safe device state.
pub struct SharedState {
    leds_enabled: AtomicBool,
    green_led_on: AtomicBool,
    border_thick: AtomicBool,
    last_joystick_press_ms: AtomicU32,
    last_button_a_press_ms: AtomicU32,
}

impl SharedState {
    /// Power-on state: LEDs enabled, green LED off, thin border.
    pub const fn new() -> Self {
        Self {
            leds_enabled: AtomicBool::new(true),
            green_led_on: AtomicBool::new(false),
            border_thick: AtomicBool::new(false),
            last_joystick_press_ms: AtomicU32::new(0),
            last_button_a_press_ms: AtomicU32::new(0),
        }
    }

    #[inline]
    pub fn leds_enabled(&self) -> bool { self.leds_enabled.load(Ordering::Relaxed) }

    #[inline]
    pub fn green_led_on(&self) -> bool { self.green_led_on.load(Ordering::Relaxed) }

    #[inline]
    pub fn border_thickness(&self) -> BorderThickness {
        BorderThickness::from_thick(self.border_thick.load(Ordering::Relaxed))
    }

    /// Read all observable fields.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            leds_enabled: self.leds_enabled(),
            green_led_on: self.green_led_on(),
            border: self.border_thickness(),
        }
    }

    /// Handle a falling edge on `line` seen at `now_ms`.
    ///
    /// Returns `None` when the edge falls inside the debounce window of that
    /// line. Never blocks; safe to call from an interrupt or an edge task
    /// while the main cycle reads the state.
    pub fn on_falling_edge(
        &self,
        line: Line,
        now_ms: u32,
    ) -> Option<Toggle> {
        // Only this method writes, so load-then-store needs no CAS.
        match line {
            Line::JoystickButton => {
                if !debounce_elapsed(&self.last_joystick_press_ms, now_ms) {
                    return None;
                }
                self.last_joystick_press_ms.store(now_ms, Ordering::Relaxed);

                let green_led_on = !self.green_led_on();
                self.green_led_on.store(green_led_on, Ordering::Relaxed);

                let border = self.border_thickness().toggle();
                self.border_thick.store(border.is_thick(), Ordering::Relaxed);

                Some(Toggle::Joystick { green_led_on, border })
            }
            Line::ButtonA => {
                if !debounce_elapsed(&self.last_button_a_press_ms, now_ms) {
                    return None;
                }
                self.last_button_a_press_ms.store(now_ms, Ordering::Relaxed);

                let enabled = !self.leds_enabled();
                self.leds_enabled.store(enabled, Ordering::Relaxed);

                Some(Toggle::LedsEnabled(enabled))
            }
        }
    }
}

impl Default for SharedState {
    fn default() -> Self { Self::new() }
}

#[inline]
fn debounce_elapsed(
    last_ms: &AtomicU32,
    now_ms: u32,
) -> bool {
    now_ms.wrapping_sub(last_ms.load(Ordering::Relaxed)) > DEBOUNCE_MS
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SharedState::new();
        assert_eq!(state.snapshot(), StateSnapshot::default());
        assert!(state.leds_enabled());
        assert!(!state.green_led_on());
        assert_eq!(state.border_thickness(), BorderThickness::Thin);
    }

    #[test]
    fn test_border_toggle() {
        assert_eq!(BorderThickness::Thin.toggle(), BorderThickness::Thick);
        assert_eq!(BorderThickness::Thick.toggle(), BorderThickness::Thin);
        assert_eq!(BorderThickness::Thin.pixels(), 2);
        assert_eq!(BorderThickness::Thick.pixels(), 4);
    }

    #[test]
    fn test_joystick_press_flips_green_and_border() {
        let state = SharedState::new();
        let toggle = state.on_falling_edge(Line::JoystickButton, 1_000);
        assert_eq!(
            toggle,
            Some(Toggle::Joystick {
                green_led_on: true,
                border: BorderThickness::Thick,
            })
        );
        assert!(state.green_led_on());
        assert_eq!(state.border_thickness(), BorderThickness::Thick);
        assert!(state.leds_enabled(), "joystick press must not touch the LED enable flag");
    }

    #[test]
    fn test_button_a_flips_leds_enabled() {
        let state = SharedState::new();
        assert_eq!(state.on_falling_edge(Line::ButtonA, 1_000), Some(Toggle::LedsEnabled(false)));
        assert!(!state.leds_enabled());
        assert!(!state.green_led_on());
        assert_eq!(state.border_thickness(), BorderThickness::Thin);
    }

    #[test]
    fn test_bounce_within_window_ignored() {
        let state = SharedState::new();
        assert!(state.on_falling_edge(Line::JoystickButton, 1_000).is_some());
        let before = state.snapshot();

        assert!(state.on_falling_edge(Line::JoystickButton, 1_010).is_none());
        assert!(state.on_falling_edge(Line::JoystickButton, 1_200).is_none());
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_window_is_strict() {
        let state = SharedState::new();
        assert!(state.on_falling_edge(Line::ButtonA, 1_000).is_some());
        // Exactly DEBOUNCE_MS later is still inside the window.
        assert!(state.on_falling_edge(Line::ButtonA, 1_000 + DEBOUNCE_MS).is_none());
        assert!(state.on_falling_edge(Line::ButtonA, 1_001 + DEBOUNCE_MS).is_some());
    }

    #[test]
    fn test_presses_apart_each_flip() {
        let state = SharedState::new();
        assert!(state.on_falling_edge(Line::ButtonA, 1_000).is_some());
        assert!(!state.leds_enabled());
        assert!(state.on_falling_edge(Line::ButtonA, 1_300).is_some());
        assert!(state.leds_enabled());
    }

    #[test]
    fn test_presses_215ms_apart_both_accepted() {
        // Edges stamped when they happen: 1215 - 1000 > 200. Stamping the first
        // one late (after a 23 ms display transfer) would reject the second.
        let state = SharedState::new();
        assert!(state.on_falling_edge(Line::JoystickButton, 1_000).is_some());
        assert_eq!(
            state.on_falling_edge(Line::JoystickButton, 1_215),
            Some(Toggle::Joystick {
                green_led_on: false,
                border: BorderThickness::Thin,
            })
        );
    }

    #[test]
    fn test_rejected_edge_does_not_extend_window() {
        let state = SharedState::new();
        assert!(state.on_falling_edge(Line::ButtonA, 1_000).is_some());
        assert!(state.on_falling_edge(Line::ButtonA, 1_150).is_none());
        // Window is measured from the last accepted edge, not the bounce.
        assert!(state.on_falling_edge(Line::ButtonA, 1_250).is_some());
    }

    #[test]
    fn test_lines_debounce_independently() {
        let state = SharedState::new();
        assert!(state.on_falling_edge(Line::JoystickButton, 1_000).is_some());
        assert!(state.on_falling_edge(Line::ButtonA, 1_005).is_some());
        assert!(state.green_led_on());
        assert!(!state.leds_enabled());
    }

    #[test]
    fn test_border_alternates_strictly() {
        let state = SharedState::new();
        let mut expected = BorderThickness::Thin;
        for i in 1..=10u32 {
            state.on_falling_edge(Line::JoystickButton, i * 500);
            expected = expected.toggle();
            assert_eq!(state.border_thickness(), expected);
            let pixels = state.border_thickness().pixels();
            assert!(pixels == 2 || pixels == 4);
        }
    }

    #[test]
    fn test_two_presses_10ms_apart_toggle_once() {
        let state = SharedState::new();
        state.on_falling_edge(Line::JoystickButton, 5_000);
        state.on_falling_edge(Line::JoystickButton, 5_010);
        assert_eq!(state.border_thickness(), BorderThickness::Thick);
        assert!(state.green_led_on());
    }

    #[test]
    fn test_edges_right_after_boot_ignored() {
        let state = SharedState::new();
        assert!(state.on_falling_edge(Line::JoystickButton, 150).is_none());
        assert!(state.on_falling_edge(Line::ButtonA, DEBOUNCE_MS).is_none());
        assert!(state.on_falling_edge(Line::ButtonA, DEBOUNCE_MS + 1).is_some());
    }

    #[test]
    fn test_timestamp_wraparound() {
        let state = SharedState::new();
        assert!(state.on_falling_edge(Line::ButtonA, u32::MAX - 50).is_some());
        // 100 ms later, across the u32 wrap.
        assert!(state.on_falling_edge(Line::ButtonA, 49).is_none());
        assert!(state.on_falling_edge(Line::ButtonA, 300).is_some());
    }

    #[test]
    fn test_line_pins() {
        assert_eq!(Line::JoystickButton.pin(), 22);
        assert_eq!(Line::ButtonA.pin(), 5);
    }
}
