#![forbid(unsafe_code)]

//! Linear gradient model.
//!
//! The effect strokes every segment with one linear gradient spanning the
//! surface diagonal `(0,0)-(width,height)`. The gradient is built once per
//! effect instance and never changes afterwards.
//!
//! Two consumers, two representations:
//! - the canvas surface hands the stop list to the browser, which does its
//!   own interpolation;
//! - the raster surface samples [`LinearGradient::color_at`] per pixel.

use crate::color::Rgba;

/// One color stop at a fractional offset along the gradient axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Fractional position in `[0, 1]` along the gradient axis.
    pub offset: f64,
    pub color: Rgba,
}

/// A linear gradient from `(x0, y0)` to `(x1, y1)` with ordered color stops.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    stops: Vec<GradientStop>,
}

/// The fixed six-stop flow palette: warm orange through pastels to yellow.
const FLOW_STOPS: [(f64, &str); 6] = [
    (0.1, "#ff5c33"),
    (0.2, "#ff66b3"),
    (0.4, "#ccccff"),
    (0.6, "#b3ffff"),
    (0.8, "#80ff80"),
    (0.9, "#ffff33"),
];

impl LinearGradient {
    /// Build the flow palette spanning the surface bounding box.
    ///
    /// Pure function of the dimensions; deterministic, called exactly once
    /// per effect instance.
    pub fn flow_palette(width: f64, height: f64) -> Self {
        let stops = FLOW_STOPS
            .iter()
            .map(|&(offset, hex)| GradientStop {
                offset,
                // The palette literals are compile-time constants; a parse
                // failure here is a programming error, not an input error.
                color: Rgba::from_hex(hex).unwrap_or(Rgba::WHITE),
            })
            .collect();
        Self {
            x0: 0.0,
            y0: 0.0,
            x1: width,
            y1: height,
            stops,
        }
    }

    /// The ordered stop list (offsets strictly increasing).
    #[inline]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Sample the gradient at fractional position `t` along its axis.
    ///
    /// Positions before the first stop clamp to the first color, positions
    /// after the last stop clamp to the last color, and positions between
    /// two stops lerp. Matches browser `CanvasGradient` semantics so the
    /// raster surface stays visually comparable to the canvas one.
    pub fn color_at(&self, t: f64) -> Rgba {
        let stops = &self.stops;
        debug_assert!(!stops.is_empty());
        let t = t.clamp(0.0, 1.0);

        let first = stops[0];
        if t <= first.offset {
            return first.color;
        }
        for pair in stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t <= hi.offset {
                let span = hi.offset - lo.offset;
                if span <= f64::EPSILON {
                    return hi.color;
                }
                let s = (t - lo.offset) / span;
                return Rgba::lerp(lo.color, hi.color, s);
            }
        }
        stops[stops.len() - 1].color
    }

    /// Project a point onto the gradient axis, returning fractional `t`.
    ///
    /// This is the per-pixel half of software gradient sampling; the browser
    /// does the equivalent internally for `CanvasGradient`.
    #[inline]
    pub fn project(&self, x: f64, y: f64) -> f64 {
        let ax = self.x1 - self.x0;
        let ay = self.y1 - self.y0;
        let len_sq = ax * ax + ay * ay;
        if len_sq <= f64::EPSILON {
            return 0.0;
        }
        ((x - self.x0) * ax + (y - self.y0) * ay) / len_sq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_palette_has_exact_stops() {
        let g = LinearGradient::flow_palette(800.0, 600.0);
        let stops = g.stops();
        assert_eq!(stops.len(), 6);

        let expected = [
            (0.1, Rgba::rgb(0xff, 0x5c, 0x33)),
            (0.2, Rgba::rgb(0xff, 0x66, 0xb3)),
            (0.4, Rgba::rgb(0xcc, 0xcc, 0xff)),
            (0.6, Rgba::rgb(0xb3, 0xff, 0xff)),
            (0.8, Rgba::rgb(0x80, 0xff, 0x80)),
            (0.9, Rgba::rgb(0xff, 0xff, 0x33)),
        ];
        for (stop, (offset, color)) in stops.iter().zip(expected) {
            assert_eq!(stop.offset, offset);
            assert_eq!(stop.color, color);
        }
    }

    #[test]
    fn flow_palette_offsets_strictly_increasing() {
        let g = LinearGradient::flow_palette(100.0, 100.0);
        for pair in g.stops().windows(2) {
            assert!(
                pair[0].offset < pair[1].offset,
                "offsets must strictly increase: {} then {}",
                pair[0].offset,
                pair[1].offset
            );
        }
    }

    #[test]
    fn flow_palette_spans_bounding_box() {
        let g = LinearGradient::flow_palette(1920.0, 1080.0);
        assert_eq!((g.x0, g.y0), (0.0, 0.0));
        assert_eq!((g.x1, g.y1), (1920.0, 1080.0));
    }

    #[test]
    fn color_at_clamps_beyond_end_stops() {
        let g = LinearGradient::flow_palette(100.0, 100.0);
        // Before 0.1: first color. After 0.9: last color.
        assert_eq!(g.color_at(0.0), Rgba::rgb(0xff, 0x5c, 0x33));
        assert_eq!(g.color_at(0.05), Rgba::rgb(0xff, 0x5c, 0x33));
        assert_eq!(g.color_at(0.95), Rgba::rgb(0xff, 0xff, 0x33));
        assert_eq!(g.color_at(1.0), Rgba::rgb(0xff, 0xff, 0x33));
    }

    #[test]
    fn color_at_hits_stops_exactly() {
        let g = LinearGradient::flow_palette(100.0, 100.0);
        for stop in g.stops() {
            assert_eq!(g.color_at(stop.offset), stop.color);
        }
    }

    #[test]
    fn color_at_blends_between_stops() {
        let g = LinearGradient::flow_palette(100.0, 100.0);
        // Midway between 0.2 (#ff66b3) and 0.4 (#ccccff).
        let mid = g.color_at(0.3);
        let expected = Rgba::lerp(Rgba::rgb(0xff, 0x66, 0xb3), Rgba::rgb(0xcc, 0xcc, 0xff), 0.5);
        assert_eq!(mid, expected);
    }

    #[test]
    fn project_maps_corners_to_unit_range() {
        let g = LinearGradient::flow_palette(200.0, 100.0);
        assert_eq!(g.project(0.0, 0.0), 0.0);
        assert!((g.project(200.0, 100.0) - 1.0).abs() < 1e-12);
        let mid = g.project(100.0, 50.0);
        assert!((mid - 0.5).abs() < 1e-12);
    }

    #[test]
    fn project_degenerate_axis_is_zero() {
        let g = LinearGradient::flow_palette(0.0, 0.0);
        assert_eq!(g.project(10.0, 10.0), 0.0);
    }
}
