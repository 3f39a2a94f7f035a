#![forbid(unsafe_code)]

//! Angle-amplitude oscillator.
//!
//! A single scalar `radius` ramps back and forth between fixed bounds,
//! scaling the per-cell angle each redraw. This is the only state that
//! persists across frames; everything else is a pure function of grid
//! position and the pointer.

/// Bound at which the ramp reverses direction.
pub const RADIUS_BOUND: f64 = 5.0;

/// Radius change per redraw.
pub const RADIUS_VELOCITY: f64 = 0.03;

/// Scalar oscillator: `radius` advances by `velocity` each redraw and the
/// velocity negates once `|radius|` exceeds [`RADIUS_BOUND`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    radius: f64,
    velocity: f64,
}

impl Oscillator {
    /// Start at rest: `radius = 0`, ramping upward.
    #[inline]
    pub const fn new() -> Self {
        Self {
            radius: 0.0,
            velocity: RADIUS_VELOCITY,
        }
    }

    /// Current amplitude.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Current per-redraw step (sign encodes ramp direction).
    #[inline]
    pub const fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Advance one redraw: step the radius, reverse outside the bound.
    ///
    /// The reversal check runs after the step, so the radius overshoots the
    /// bound by at most one velocity increment before turning around. That
    /// overshoot is part of the visual contract.
    #[inline]
    pub fn advance(&mut self) {
        self.radius += self.velocity;
        if self.radius > RADIUS_BOUND || self.radius < -RADIUS_BOUND {
            self.velocity = -self.velocity;
        }
    }
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new()
    }
}
