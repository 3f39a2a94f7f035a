#![forbid(unsafe_code)]

//! Software raster surface.
//!
//! A headless [`Surface`] over a row-major pixel buffer
//! (`pixels[y * width + x]`). Lines are stroked with Bresenham; when a
//! gradient is active each plotted pixel samples the gradient at its own
//! projection onto the gradient axis, approximating what the browser does
//! for `CanvasGradient` strokes.
//!
//! Used by the integration tests and by anything that wants a frame without
//! a browser (thumbnails, golden images). Stroke width is recorded but not
//! rasterized: one-pixel strokes are enough for a headless check, and the
//! visual contract fixes the width at 1 anyway.

use crate::color::Rgba;
use crate::field::LineSegment;
use crate::gradient::LinearGradient;
use crate::surface::Surface;

/// Active stroke style: solid color or per-pixel sampled gradient.
#[derive(Debug, Clone, PartialEq)]
enum StrokeStyle {
    Solid(Rgba),
    Gradient(LinearGradient),
}

/// Software rendering target over a flat RGBA buffer.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
    style: StrokeStyle,
    line_width: f64,
}

impl RasterSurface {
    /// Create a surface cleared to transparent.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width as usize * height as usize],
            style: StrokeStyle::Solid(Rgba::WHITE),
            line_width: 1.0,
        }
    }

    /// Surface width in pixels.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The raw row-major pixel buffer.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// The recorded stroke width (not rasterized; see module docs).
    #[inline]
    pub const fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Count of non-transparent pixels. Convenient for tests.
    pub fn painted(&self) -> usize {
        self.pixels
            .iter()
            .filter(|&&p| p != Rgba::TRANSPARENT)
            .count()
    }

    #[inline]
    fn plot(&mut self, x: i64, y: i64) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let color = match &self.style {
            StrokeStyle::Solid(c) => *c,
            StrokeStyle::Gradient(g) => g.color_at(g.project(x as f64, y as f64)),
        };
        self.pixels[(y as u64 * self.width as u64 + x as u64) as usize] = color;
    }

    /// Bresenham stroke between rounded segment endpoints.
    fn stroke_bresenham(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx: i64 = if x0 < x1 { 1 } else { -1 };
        let sy: i64 = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut cx = x0;
        let mut cy = y0;

        loop {
            self.plot(cx, cy);

            if cx == x1 && cy == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                if cx == x1 {
                    break;
                }
                err += dy;
                cx += sx;
            }
            if e2 <= dx {
                if cy == y1 {
                    break;
                }
                err += dx;
                cy += sy;
            }
        }
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self, width: f64, height: f64) {
        // The effect always clears its full bounds; anything smaller is
        // clamped to the buffer regardless.
        let w = (width.max(0.0) as u32).min(self.width);
        let h = (height.max(0.0) as u32).min(self.height);
        for y in 0..h {
            let row = (y * self.width) as usize;
            self.pixels[row..row + w as usize].fill(Rgba::TRANSPARENT);
        }
    }

    fn stroke_segment(&mut self, segment: LineSegment) {
        let x0 = segment.x0.round() as i64;
        let y0 = segment.y0.round() as i64;
        let x1 = segment.x1.round() as i64;
        let y1 = segment.y1.round() as i64;
        self.stroke_bresenham(x0, y0, x1, y1);
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.style = StrokeStyle::Solid(color);
    }

    fn set_stroke_gradient(&mut self, gradient: &LinearGradient) {
        self.style = StrokeStyle::Gradient(gradient.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_stroke_paints_every_column() {
        let mut surf = RasterSurface::new(10, 3);
        surf.set_stroke_color(Rgba::rgb(255, 0, 0));
        surf.stroke_segment(LineSegment {
            x0: 0.0,
            y0: 1.0,
            x1: 9.0,
            y1: 1.0,
        });
        for x in 0..10 {
            assert_eq!(surf.pixel(x, 1), Some(Rgba::rgb(255, 0, 0)), "x = {x}");
        }
        assert_eq!(surf.painted(), 10);
    }

    #[test]
    fn diagonal_stroke_hits_both_endpoints() {
        let mut surf = RasterSurface::new(8, 8);
        surf.set_stroke_color(Rgba::WHITE);
        surf.stroke_segment(LineSegment {
            x0: 0.0,
            y0: 0.0,
            x1: 7.0,
            y1: 7.0,
        });
        assert_eq!(surf.pixel(0, 0), Some(Rgba::WHITE));
        assert_eq!(surf.pixel(7, 7), Some(Rgba::WHITE));
        assert_eq!(surf.painted(), 8);
    }

    #[test]
    fn degenerate_segment_paints_single_pixel() {
        let mut surf = RasterSurface::new(4, 4);
        surf.set_stroke_color(Rgba::WHITE);
        surf.stroke_segment(LineSegment {
            x0: 2.0,
            y0: 2.0,
            x1: 2.0,
            y1: 2.0,
        });
        assert_eq!(surf.painted(), 1);
        assert_eq!(surf.pixel(2, 2), Some(Rgba::WHITE));
    }

    #[test]
    fn strokes_outside_bounds_are_clipped_without_panic() {
        let mut surf = RasterSurface::new(4, 4);
        surf.set_stroke_color(Rgba::WHITE);
        surf.stroke_segment(LineSegment {
            x0: -10.0,
            y0: -10.0,
            x1: 20.0,
            y1: 20.0,
        });
        // Only the in-bounds diagonal run survives.
        assert!(surf.painted() <= 4 * 4);
        assert!(surf.painted() > 0);
    }

    #[test]
    fn clear_resets_painted_region() {
        let mut surf = RasterSurface::new(6, 6);
        surf.set_stroke_color(Rgba::WHITE);
        surf.stroke_segment(LineSegment {
            x0: 0.0,
            y0: 0.0,
            x1: 5.0,
            y1: 5.0,
        });
        assert!(surf.painted() > 0);
        surf.clear(6.0, 6.0);
        assert_eq!(surf.painted(), 0);
    }

    #[test]
    fn gradient_stroke_varies_along_axis() {
        let mut surf = RasterSurface::new(100, 4);
        let gradient = crate::gradient::LinearGradient::flow_palette(100.0, 4.0);
        surf.set_stroke_gradient(&gradient);
        surf.stroke_segment(LineSegment {
            x0: 0.0,
            y0: 0.0,
            x1: 99.0,
            y1: 0.0,
        });
        // Near-start pixel sits in the warm end, far pixel in the yellow end.
        let start = surf.pixel(0, 0).unwrap();
        let end = surf.pixel(99, 0).unwrap();
        assert_ne!(start, end);
        assert_eq!(start, Rgba::rgb(0xff, 0x5c, 0x33));
    }

    #[test]
    fn zero_sized_surface_tolerates_all_calls() {
        let mut surf = RasterSurface::new(0, 0);
        surf.clear(0.0, 0.0);
        surf.stroke_segment(LineSegment {
            x0: 0.0,
            y0: 0.0,
            x1: 1.0,
            y1: 1.0,
        });
        assert_eq!(surf.painted(), 0);
    }
}
