//! Minimum-interval gate for expensive recomputation.
//!
//! The display refresh drives the engine every frame; throttles keep the
//! heavier resolvers (bounds, grid, span meshes) at their own lower rates.

use instant::Instant;
use std::time::Duration;

/// Rate limiter with a fixed minimum interval between firings.
///
/// Fires on the first call, then only once the interval has elapsed since
/// the last firing. Callers pass `now` explicitly so tests can step time.
#[derive(Clone, Copy, Debug)]
pub struct FrameThrottle {
    interval: Duration,
    last_fired: Option<Instant>,
}

impl FrameThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
        }
    }

    /// A throttle admitting at most `hz` firings per second. Non-positive
    /// rates degenerate to an always-open gate.
    pub fn from_hz(hz: f32) -> Self {
        let interval = if hz > 0.0 {
            Duration::from_secs_f32(1.0 / hz)
        } else {
            Duration::ZERO
        };
        Self::new(interval)
    }

    /// Whether enough time has passed to run again; records the firing.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last_fired {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }

    /// Forget the last firing so the next [`ready`](Self::ready) call fires.
    pub fn reset(&mut self) {
        self.last_fired = None;
    }
}
