#![forbid(unsafe_code)]

//! The flow field effect: per-frame simulation plus drawing.
//!
//! [`FlowFieldEffect`] owns one [`Surface`] exclusively, together with the
//! oscillator, the frame clock, and the cached gradient. It exposes exactly
//! one operation per host tick: [`step`](FlowFieldEffect::step). Scheduling
//! policy lives in the driver (the web frontend re-registers its animation
//! callback and owns cancellation); the effect itself never self-schedules.
//!
//! Resize is full reconstruction: the driver cancels its pending callback,
//! drops this instance, and builds a fresh one with the new dimensions.
//! Nothing carries over - oscillator, clock, and gradient all reset.

use crate::clock::FrameClock;
use crate::field::{self, Pointer};
use crate::gradient::LinearGradient;
use crate::oscillator::Oscillator;
use crate::surface::Surface;

/// Outcome of a single [`FlowFieldEffect::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The interval gate fired: the surface was cleared and fully repainted.
    RedrawOccurred,
    /// The gate did not fire; no surface mutation happened this tick.
    Skipped,
}

impl StepOutcome {
    /// `true` when this tick repainted the surface.
    #[inline]
    pub const fn redrew(self) -> bool {
        matches!(self, Self::RedrawOccurred)
    }
}

/// Tunable parameters. The defaults are the fixed visual contract; hosts
/// that want a denser grid or a different throttle override individual
/// fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowFieldParams {
    /// Grid spacing in surface units.
    pub cell_size: f64,
    /// Redraw throttle interval, milliseconds.
    pub target_interval_ms: f64,
    /// Persistent stroke width.
    pub line_width: f64,
}

impl Default for FlowFieldParams {
    fn default() -> Self {
        Self {
            cell_size: field::CELL_SIZE,
            target_interval_ms: crate::clock::TARGET_INTERVAL_MS,
            line_width: 1.0,
        }
    }
}

/// The animation component: surface binding, oscillator, clock, gradient.
#[derive(Debug)]
pub struct FlowFieldEffect<S: Surface> {
    surface: S,
    width: f64,
    height: f64,
    cell_size: f64,
    gradient: LinearGradient,
    oscillator: Oscillator,
    clock: FrameClock,
}

impl<S: Surface> FlowFieldEffect<S> {
    /// Bind the effect to a surface with the default (contract) parameters.
    ///
    /// Applies the persistent stroke styling once: width 1, white, then the
    /// six-stop flow gradient as the active stroke style. Dimensions are
    /// trusted; the caller validates them.
    pub fn new(surface: S, width: f64, height: f64) -> Self {
        Self::with_params(surface, width, height, FlowFieldParams::default())
    }

    /// Bind the effect with explicit parameters.
    pub fn with_params(mut surface: S, width: f64, height: f64, params: FlowFieldParams) -> Self {
        surface.set_stroke_color(crate::color::Rgba::WHITE);
        surface.set_line_width(params.line_width);
        let gradient = LinearGradient::flow_palette(width, height);
        surface.set_stroke_gradient(&gradient);

        #[cfg(feature = "tracing")]
        tracing::debug!(width, height, "flow field effect constructed");

        Self {
            surface,
            width,
            height,
            cell_size: params.cell_size,
            gradient,
            oscillator: Oscillator::new(),
            clock: FrameClock::with_interval(params.target_interval_ms),
        }
    }

    /// Logical surface width.
    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Logical surface height.
    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// The cached stroke gradient.
    #[inline]
    pub fn gradient(&self) -> &LinearGradient {
        &self.gradient
    }

    /// Current oscillator state (radius drives angle amplitude).
    #[inline]
    pub const fn oscillator(&self) -> &Oscillator {
        &self.oscillator
    }

    /// Time accumulated toward the next redraw, in milliseconds.
    #[inline]
    pub const fn accumulated_ms(&self) -> f64 {
        self.clock.accumulated()
    }

    /// Give the surface back, consuming the effect. The driver uses this on
    /// resize to rebind the context to a fresh instance.
    #[inline]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Process one host tick.
    ///
    /// `timestamp` is the host's monotonic callback timestamp in
    /// milliseconds; `pointer` is the latest pointer snapshot in surface
    /// coordinates. When the interval gate fires this clears the surface,
    /// advances the oscillator, and strokes one segment per grid cell.
    pub fn step(&mut self, timestamp: f64, pointer: Pointer) -> StepOutcome {
        if !self.clock.tick(timestamp) {
            return StepOutcome::Skipped;
        }

        self.surface.clear(self.width, self.height);
        self.oscillator.advance();
        let radius = self.oscillator.radius();

        for (x, y) in field::cells_spaced(self.width, self.height, self.cell_size) {
            let angle = field::cell_angle(pointer, x, y, radius);
            self.surface
                .stroke_segment(field::cell_segment(pointer, x, y, angle));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(timestamp, radius, "redraw");

        StepOutcome::RedrawOccurred
    }
}
