#![forbid(unsafe_code)]

//! Compact RGBA color.
//!
//! Stroke colors and gradient stops are stored as a single packed `u32` so
//! that the raster surface can hold a whole framebuffer as a flat `Vec<Rgba>`
//! and compare/fill it cheaply.
//!
//! Layout: `0xRRGGBBAA` (R in bits 31..24, A in bits 7..0). Straight alpha;
//! nothing in this crate pre-multiplies.

/// A compact RGBA color (4 bytes, `0xRRGGBBAA`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct Rgba(pub u32);

impl Rgba {
    /// Fully transparent (alpha = 0).
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white. Initial stroke color before the gradient is installed.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create an opaque RGB color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an RGBA color with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Parse a `#rrggbb` hex string (lowercase or uppercase digits).
    ///
    /// Returns `None` for any other shape; the fixed palette stops are the
    /// only callers and are covered by tests, so there is no richer error
    /// type here.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::rgb(r, g, b))
    }

    /// Format as a `#rrggbb` CSS color string (alpha ignored).
    ///
    /// Canvas stroke styles and gradient stops are set with CSS strings, so
    /// the web surface round-trips through this.
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }

    /// Fixed-point color lerp using u32 arithmetic (avoids f64 per channel).
    #[inline]
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        let t256 = (t.clamp(0.0, 1.0) * 256.0) as u32;
        let inv = 256 - t256;
        let r = ((a.r() as u32 * inv + b.r() as u32 * t256) >> 8) as u8;
        let g = ((a.g() as u32 * inv + b.g() as u32 * t256) >> 8) as u8;
        let bl = ((a.b() as u32 * inv + b.b() as u32 * t256) >> 8) as u8;
        let al = ((a.a() as u32 * inv + b.a() as u32 * t256) >> 8) as u8;
        Self::rgba(r, g, bl, al)
    }
}
