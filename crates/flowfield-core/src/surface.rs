#![forbid(unsafe_code)]

//! Drawing surface abstraction.
//!
//! [`Surface`] is the seam between the simulation and the platform: the
//! effect owns exactly one surface and drives it through this trait, so the
//! same frame step renders to a browser canvas, a software raster buffer,
//! or a recording double in tests.
//!
//! Invariants for implementations:
//! - calls arrive on a single timeline, never reentrantly;
//! - zero-sized clears and degenerate (zero-length) segments must be
//!   tolerated without panicking;
//! - stroke styling is persistent: a style set once applies to every
//!   subsequent stroke until replaced.

use crate::color::Rgba;
use crate::field::LineSegment;
use crate::gradient::LinearGradient;

/// A 2D drawing target supporting the operations the effect needs: clearing
/// a rectangle, stroking segments, and persistent stroke styling.
pub trait Surface {
    /// Clear the axis-aligned rectangle `[0,0]-(width,height)`.
    fn clear(&mut self, width: f64, height: f64);

    /// Stroke one line segment with the active style.
    fn stroke_segment(&mut self, segment: LineSegment);

    /// Set the persistent stroke width.
    fn set_line_width(&mut self, width: f64);

    /// Set a solid stroke color, replacing any active gradient.
    fn set_stroke_color(&mut self, color: Rgba);

    /// Install a linear gradient as the active stroke style.
    fn set_stroke_gradient(&mut self, gradient: &LinearGradient);
}
