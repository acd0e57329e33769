//! Unified telemetry module: counters and immutable snapshots.
//!
//! Counters are mutated only by the single orchestrator; snapshots are
//! frozen copies taken once a run completes, so results stay
//! reproducible across sequential and pipelined execution.

pub mod counters;
pub mod snapshot;

pub use counters::TelemetryCounters;
pub use snapshot::TelemetrySnapshot;
