#![forbid(unsafe_code)]

//! Redraw gating clock.
//!
//! The host animation callback fires at whatever rate the display refreshes;
//! [`FrameClock`] throttles full redraws to a fixed target interval so the
//! animation advances at the same speed on a 60 Hz laptop and a 144 Hz
//! monitor.
//!
//! Gate semantics (load-bearing, see the tick tests):
//! - the `accumulated > target` check happens *before* this tick's delta is
//!   folded in;
//! - when the gate fires, `accumulated` resets to exactly zero. Surplus time
//!   is discarded rather than carried forward; a stall long enough for that
//!   to matter does not occur on the target platforms.

/// Target redraw interval for 60 FPS, in milliseconds.
pub const TARGET_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// Accumulator clock deciding whether a tick performs a full redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    last_timestamp: f64,
    accumulated: f64,
    target_interval: f64,
}

impl FrameClock {
    /// Clock targeting [`TARGET_INTERVAL_MS`].
    #[inline]
    pub const fn new() -> Self {
        Self::with_interval(TARGET_INTERVAL_MS)
    }

    /// Clock with a custom target interval (milliseconds).
    #[inline]
    pub const fn with_interval(target_interval: f64) -> Self {
        Self {
            last_timestamp: 0.0,
            accumulated: 0.0,
            target_interval,
        }
    }

    /// Time accumulated toward the next redraw, in milliseconds.
    #[inline]
    pub const fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// The configured redraw interval, in milliseconds.
    #[inline]
    pub const fn target_interval(&self) -> f64 {
        self.target_interval
    }

    /// Process one host tick at `timestamp` (milliseconds, monotonic).
    ///
    /// Returns `true` when this tick should perform a full redraw. At most
    /// one redraw fires per call regardless of how much time has passed.
    #[inline]
    pub fn tick(&mut self, timestamp: f64) -> bool {
        let delta = timestamp - self.last_timestamp;
        self.last_timestamp = timestamp;

        if self.accumulated > self.target_interval {
            self.accumulated = 0.0;
            true
        } else {
            self.accumulated += delta;
            false
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
