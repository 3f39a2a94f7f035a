#![forbid(unsafe_code)]

//! Shared pointer cell.
//!
//! The `mousemove` listener writes the latest pointer position here; the
//! animation callback snapshots it at the top of every tick and hands the
//! copy to the core. Both sides run on the browser's single event timeline,
//! so a plain `Cell` inside an `Rc` is enough: one writer, one reader,
//! every write fully visible to the next read.

use flowfield_core::Pointer;
use std::cell::Cell;
use std::rc::Rc;

/// Cheaply cloneable handle to the latest pointer position.
#[derive(Debug, Clone, Default)]
pub struct SharedPointer(Rc<Cell<Pointer>>);

impl SharedPointer {
    /// New handle starting at the origin (no pointer seen yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a new pointer position (surface coordinates).
    #[inline]
    pub fn set(&self, x: f64, y: f64) {
        self.0.set(Pointer::new(x, y));
    }

    /// Snapshot the latest position.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Pointer {
        self.0.get()
    }
}
