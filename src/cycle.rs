//! One iteration of the main cycle, minus the hardware.
//!
//! The firmware loop is: sample → [`plan_cycle`] → write duties → draw and
//! flush the frame → sleep. This module holds the pure middle step so the
//! whole sample-to-output path can be checked on the host.

use crate::brightness::{LedDuty, map_brightness};
use crate::config::STATUS_LOG_INTERVAL_MS;
use crate::render::RenderFrame;
use crate::sample::Sample;
use crate::state::StateSnapshot;

/// Outputs of one cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CycleOutput {
    pub duty: LedDuty,
    pub frame: RenderFrame,
}

/// Compute LED duties and the frame for `sample` under `state`.
#[inline]
pub fn plan_cycle(
    sample: Sample,
    state: StateSnapshot,
) -> CycleOutput {
    CycleOutput {
        duty: map_brightness(sample, state.leds_enabled),
        frame: RenderFrame::new(sample, state.border),
    }
}

// =============================================================================
// Status Logging Cadence
// =============================================================================

/// Rate limiter for the periodic status log line.
pub struct StatusTimer {
    last_ms: Option<u32>,
}

impl StatusTimer {
    pub const fn new() -> Self { Self { last_ms: None } }

    /// Returns true on the first call and then at most once per
    /// [`STATUS_LOG_INTERVAL_MS`].
    pub fn due(
        &mut self,
        now_ms: u32,
    ) -> bool {
        if let Some(last) = self.last_ms
            && now_ms.wrapping_sub(last) < STATUS_LOG_INTERVAL_MS
        {
            return false;
        }
        self.last_ms = Some(now_ms);
        true
    }
}

impl Default for StatusTimer {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
