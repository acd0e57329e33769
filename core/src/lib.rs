//! align-core
//!
//! Bus-word realignment and boundary-signaling engine: re-slices a
//! continuous byte stream delivered in fixed-width bus words onto
//! per-consumer logical segment boundaries, detecting the sentinel
//! words that terminate each segment and carrying their misalignment
//! delta into the next one.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Engine layers
pub mod align;
pub mod boundary;
pub mod stream;

// Support
pub mod fixture;
pub mod telemetry;

pub use align::{ConsumerStream, DataAligner, ShifterRecombiner};
pub use boundary::BoundarySignal;
pub use types::{AlignError, BusWord};
