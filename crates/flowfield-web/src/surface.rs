#![forbid(unsafe_code)]

//! Canvas 2D drawing surface.
//!
//! Implements the core [`Surface`] trait over `CanvasRenderingContext2d`.
//! Stroke styling is persistent on the context itself, matching the trait
//! contract; the gradient is translated once into a native `CanvasGradient`
//! and the browser handles per-pixel interpolation from there.

use flowfield_core::{LineSegment, LinearGradient, Rgba, Surface};
use web_sys::CanvasRenderingContext2d;

/// A [`Surface`] over an HTML `<canvas>` 2D context.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap an existing 2D context.
    #[must_use]
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Borrow the underlying context.
    #[must_use]
    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn stroke_segment(&mut self, segment: LineSegment) {
        self.ctx.begin_path();
        self.ctx.move_to(segment.x0, segment.y0);
        self.ctx.line_to(segment.x1, segment.y1);
        self.ctx.stroke();
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }

    fn set_stroke_gradient(&mut self, gradient: &LinearGradient) {
        let native = self.ctx.create_linear_gradient(
            gradient.x0,
            gradient.y0,
            gradient.x1,
            gradient.y1,
        );
        for stop in gradient.stops() {
            // The stop offsets are fixed constants inside [0, 1], so the
            // only failure add_color_stop can signal cannot occur here.
            let _ = native.add_color_stop(stop.offset as f32, &stop.color.to_css());
        }
        self.ctx.set_stroke_style_canvas_gradient(&native);
    }
}
