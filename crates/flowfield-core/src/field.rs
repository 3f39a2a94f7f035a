#![forbid(unsafe_code)]

//! Grid field math.
//!
//! Everything here is a pure function of grid position, the pointer
//! snapshot, and the oscillator radius. The per-cell work runs once per
//! cell per redraw (`width/cell_size * height/cell_size` calls), so these
//! functions allocate nothing and never take a square root: the distance
//! clamp bounds are tuned for *squared* distance.

/// Grid spacing in surface units.
pub const CELL_SIZE: f64 = 15.0;

/// Lower clamp bound for squared pointer distance.
pub const DISTANCE_SQ_MIN: f64 = 50_000.0;

/// Upper clamp bound for squared pointer distance.
pub const DISTANCE_SQ_MAX: f64 = 600_000.0;

/// Segment length per unit of clamped squared distance.
pub const LENGTH_SCALE: f64 = 0.0001;

/// Frequency scale applied to `pointer * cell` products in the angle term.
pub const ANGLE_FREQUENCY: f64 = 0.000_01;

/// Latest known pointer position in surface coordinates.
///
/// A plain value snapshot: the frontend samples whatever shared cell its
/// event wiring maintains and passes the copy into the frame step, so the
/// core never reads hidden shared state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A straight stroke from `(x0, y0)` to `(x1, y1)` in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// Per-cell angle: interference of two pointer-scaled waves, amplified by
/// the oscillator radius.
#[inline]
pub fn cell_angle(pointer: Pointer, x: f64, y: f64, radius: f64) -> f64 {
    ((pointer.x * x * ANGLE_FREQUENCY).cos() + (pointer.y * y * ANGLE_FREQUENCY).sin()) * radius
}

/// Squared distance from the pointer to a cell origin, clamped to
/// `[DISTANCE_SQ_MIN, DISTANCE_SQ_MAX]`.
#[inline]
pub fn clamped_distance_sq(pointer: Pointer, x: f64, y: f64) -> f64 {
    let dx = pointer.x - x;
    let dy = pointer.y - y;
    (dx * dx + dy * dy).clamp(DISTANCE_SQ_MIN, DISTANCE_SQ_MAX)
}

/// Build the segment for one cell: anchored at the cell origin, oriented by
/// `angle`, with length proportional to the clamped squared pointer
/// distance.
#[inline]
pub fn cell_segment(pointer: Pointer, x: f64, y: f64, angle: f64) -> LineSegment {
    let length = clamped_distance_sq(pointer, x, y) * LENGTH_SCALE;
    let (sin, cos) = angle.sin_cos();
    LineSegment {
        x0: x,
        y0: y,
        x1: x + cos * length,
        y1: y + sin * length,
    }
}

/// Iterate cell origins row-major over `[0, width) x [0, height)` at
/// [`CELL_SIZE`] spacing.
///
/// Matches the redraw scan order: `y` outer, `x` inner. Zero-sized surfaces
/// yield nothing.
pub fn cells(width: f64, height: f64) -> impl Iterator<Item = (f64, f64)> {
    cells_spaced(width, height, CELL_SIZE)
}

/// Like [`cells`] with an explicit grid spacing (for non-default params).
pub fn cells_spaced(width: f64, height: f64, cell_size: f64) -> impl Iterator<Item = (f64, f64)> {
    let rows = steps(height, cell_size);
    let cols = steps(width, cell_size);
    (0..rows).flat_map(move |row| {
        let y = row as f64 * cell_size;
        (0..cols).map(move |col| (col as f64 * cell_size, y))
    })
}

/// Number of `cell_size` strides covering `[0, extent)`.
#[inline]
fn steps(extent: f64, cell_size: f64) -> u32 {
    if extent <= 0.0 || cell_size <= 0.0 {
        return 0;
    }
    (extent / cell_size).ceil() as u32
}
