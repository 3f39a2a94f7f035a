#![forbid(unsafe_code)]

//! Frame cadence telemetry.
//!
//! Collects per-tick records (timestamp, delta, whether the gate fired) and
//! summarises them into a [`CadenceReport`]. The web frontend exposes the
//! report over its JS API so a page can verify the throttle is holding the
//! target rate; the integration tests use the same collector to assert
//! cadence properties without touching a browser.

use serde::Serialize;

use crate::effect::StepOutcome;

/// One tick's measurements.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TickRecord {
    /// Host callback timestamp, milliseconds.
    pub timestamp_ms: f64,
    /// Delta from the previous tick, milliseconds (0 for the first tick).
    pub delta_ms: f64,
    /// Whether this tick performed a full redraw.
    pub redraw: bool,
}

/// Collects per-tick records for one effect instance.
///
/// Reset (dropped and recreated) alongside the effect on resize, so a
/// report always describes a single instance's lifetime.
#[derive(Debug, Default)]
pub struct CadenceCollector {
    records: Vec<TickRecord>,
    last_timestamp: Option<f64>,
}

impl CadenceCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one tick's outcome.
    pub fn record(&mut self, timestamp_ms: f64, outcome: StepOutcome) {
        let delta_ms = self
            .last_timestamp
            .map(|prev| timestamp_ms - prev)
            .unwrap_or(0.0);
        self.last_timestamp = Some(timestamp_ms);
        self.records.push(TickRecord {
            timestamp_ms,
            delta_ms,
            redraw: outcome.redrew(),
        });
    }

    /// Number of ticks recorded so far.
    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.records.len()
    }

    /// The raw tick records.
    #[must_use]
    pub fn records(&self) -> &[TickRecord] {
        &self.records
    }

    /// Summarise all recorded ticks.
    #[must_use]
    pub fn report(&self) -> CadenceReport {
        let ticks = self.records.len() as u64;
        let redraws = self.records.iter().filter(|r| r.redraw).count() as u64;
        let elapsed_ms = match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => last.timestamp_ms - first.timestamp_ms,
            _ => 0.0,
        };
        let redraws_per_second = if elapsed_ms > 0.0 {
            redraws as f64 * 1000.0 / elapsed_ms
        } else {
            0.0
        };
        CadenceReport {
            ticks,
            redraws,
            elapsed_ms,
            redraws_per_second,
        }
    }

    /// Emit per-tick JSONL (one JSON object per line).
    #[must_use]
    pub fn to_jsonl(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            if let Ok(line) = serde_json::to_string(record) {
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }
}

/// Summary of an instance's tick/redraw cadence.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CadenceReport {
    /// Total host ticks observed.
    pub ticks: u64,
    /// Ticks that performed a full redraw.
    pub redraws: u64,
    /// Wall time between first and last tick, milliseconds.
    pub elapsed_ms: f64,
    /// Effective redraw rate over the observed window.
    pub redraws_per_second: f64,
}

impl CadenceReport {
    /// Serialize to a JSON string.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
