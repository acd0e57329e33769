//! Immutable telemetry snapshot taken at pipeline end.

use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryCounters;

/// Frozen view of one completed run, safe to hand across API
/// boundaries and stable under serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub words_in: u64,
    pub words_out: u64,
    pub data_words: u64,
    pub boundary_words: u64,
    pub stall_cycles: u64,
    pub segments: u64,
    pub bytes_delivered: u64,
    pub consumers: usize,
}

impl TelemetrySnapshot {
    pub fn from_counters(counters: &TelemetryCounters, consumers: usize) -> Self {
        Self {
            words_in: counters.words_in,
            words_out: counters.words_out,
            data_words: counters.data_words,
            boundary_words: counters.boundary_words,
            stall_cycles: counters.stall_cycles,
            segments: counters.segments,
            bytes_delivered: counters.bytes_delivered,
            consumers,
        }
    }

    /// Fraction of delivered words that were re-extracted from the
    /// carry instead of consuming fresh input.
    pub fn stall_ratio(&self) -> f64 {
        if self.words_out == 0 {
            return 0.0;
        }
        self.stall_cycles as f64 / self.words_out as f64
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
