#![forbid(unsafe_code)]

//! WASM frontend for the flow field effect.
//!
//! This crate is intentionally host-specific (web/WASM). It wires the
//! platform-neutral `flowfield-core` effect to a browser page:
//! - a [`Surface`](flowfield_core::Surface) implementation over an HTML
//!   `<canvas>` 2D context,
//! - the `requestAnimationFrame` loop (self-re-registering, cancellable),
//! - pointer-move capture into a shared cell snapshotted each tick,
//! - the resize lifecycle: cancel the pending frame, rebuild the effect
//!   from scratch with the new dimensions, restart the loop.
//!
//! Options parsing and pointer sharing are platform-neutral and tested on
//! native targets; only the canvas/raf glue is wasm-gated.

pub mod options;
pub mod pointer;

#[cfg(target_arch = "wasm32")]
mod surface;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use surface::CanvasSurface;
#[cfg(target_arch = "wasm32")]
pub use wasm::FlowFieldWeb;

pub use options::EffectOptions;
pub use pointer::SharedPointer;

/// Native builds compile this crate as a stub so `cargo check --workspace`
/// stays green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct FlowFieldWeb;

#[cfg(not(target_arch = "wasm32"))]
impl FlowFieldWeb {
    pub fn new() -> Self {
        Self
    }
}
