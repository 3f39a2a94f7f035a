#![forbid(unsafe_code)]

//! Deterministic flow-field simulation core.
//!
//! A grid of short line segments whose angles follow a time-varying
//! trigonometric function of cell position and the latest pointer snapshot,
//! amplified by a slow oscillator. This crate owns the whole per-frame
//! pipeline - interval gating, oscillator advance, grid scan, segment
//! geometry - behind a platform-neutral [`Surface`] trait, so the same
//! effect renders to a browser canvas (see `flowfield-web`) or a software
//! raster buffer.
//!
//! # Design
//!
//! - **Deterministic**: a step is a pure function of the timestamp, the
//!   pointer snapshot, and prior state. No randomness, no global state.
//! - **No per-frame allocations**: the hot loop is trig and one stroke call
//!   per cell; the squared-distance clamp deliberately avoids `sqrt`.
//! - **Driver-owned scheduling**: [`FlowFieldEffect::step`] reports whether
//!   it redrew; the host loop decides when to call it again and how to
//!   cancel. The effect never self-schedules.
//! - **Tiny-area safe**: zero width/height renders nothing and never
//!   panics.

pub mod clock;
pub mod color;
pub mod effect;
pub mod field;
pub mod gradient;
pub mod oscillator;
pub mod raster;
pub mod surface;
pub mod telemetry;

pub use clock::{FrameClock, TARGET_INTERVAL_MS};
pub use color::Rgba;
pub use effect::{FlowFieldEffect, FlowFieldParams, StepOutcome};
pub use field::{CELL_SIZE, LineSegment, Pointer};
pub use gradient::{GradientStop, LinearGradient};
pub use oscillator::Oscillator;
pub use raster::RasterSurface;
pub use surface::Surface;
pub use telemetry::{CadenceCollector, CadenceReport};
