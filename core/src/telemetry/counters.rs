//! Mutable counters collected while the orchestrator runs.
//!
//! Converted into an immutable [`TelemetrySnapshot`] at pipeline end.
//!
//! [`TelemetrySnapshot`]: crate::telemetry::TelemetrySnapshot

/// Deterministic counters collected during stream realignment.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct TelemetryCounters {
    pub words_in: u64,
    pub words_out: u64,
    pub data_words: u64,
    pub boundary_words: u64,
    pub stall_cycles: u64,
    pub segments: u64,
    pub bytes_delivered: u64,
}

impl TelemetryCounters {
    /// Record one raw word consumed from the input stream.
    pub fn add_raw_word(&mut self) {
        self.words_in += 1;
    }

    /// Record one full data word delivered to the active consumer.
    pub fn add_data_word(&mut self, width: usize) {
        self.words_out += 1;
        self.data_words += 1;
        self.bytes_delivered += width as u64;
    }

    /// Record one boundary word delivered. Only the `carry_len` bytes
    /// ahead of the lookahead region count as delivered payload.
    pub fn add_boundary_word(&mut self, carry_len: usize) {
        self.words_out += 1;
        self.boundary_words += 1;
        self.segments += 1;
        self.bytes_delivered += carry_len as u64;
    }

    /// Record a cycle where the next word was re-extracted from the
    /// carried pair without consuming input.
    pub fn add_stall(&mut self) {
        self.stall_cycles += 1;
    }
}
