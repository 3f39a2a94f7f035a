#![forbid(unsafe_code)]

//! JS-facing effect options.
//!
//! The page passes options to `init` as a JSON string; missing fields fall
//! back to the fixed visual contract, so `{}` (or no options at all) gives
//! the canonical effect.

use flowfield_core::FlowFieldParams;
use serde::Deserialize;

/// Host-tunable knobs, deserialized from the `init` options argument.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct EffectOptions {
    /// Grid spacing in canvas pixels.
    pub cell_size: f64,
    /// Redraw throttle target, frames per second.
    pub target_fps: f64,
    /// Stroke width in canvas pixels.
    pub line_width: f64,
}

impl Default for EffectOptions {
    fn default() -> Self {
        Self {
            cell_size: 15.0,
            target_fps: 60.0,
            line_width: 1.0,
        }
    }
}

impl EffectOptions {
    /// Parse from a JSON string; `None` or empty means defaults.
    pub fn from_json(json: Option<&str>) -> Result<Self, serde_json::Error> {
        match json {
            None => Ok(Self::default()),
            Some(s) if s.trim().is_empty() => Ok(Self::default()),
            Some(s) => serde_json::from_str(s),
        }
    }

    /// Convert to core effect parameters.
    ///
    /// A non-positive `target_fps` falls back to the default throttle
    /// rather than producing a degenerate interval.
    pub fn params(&self) -> FlowFieldParams {
        let target_interval_ms = if self.target_fps > 0.0 {
            1000.0 / self.target_fps
        } else {
            FlowFieldParams::default().target_interval_ms
        };
        FlowFieldParams {
            cell_size: self.cell_size,
            target_interval_ms,
            line_width: self.line_width,
        }
    }
}
