//! The realignment core: window extraction, the two-word shifter, and
//! the DataAligner orchestrator.
//!
//! Responsibilities:
//! - Re-slice the raw word stream to per-segment logical boundaries
//! - Track and update the misalignment across segment handoffs
//! - Route aligned words to consumers in cyclic segment order
//!
//! Non-responsibilities:
//! - Interpreting payload values (external codecs)
//! - Fixture file formats (see [`crate::stream`])

pub mod aligner;
pub mod shifter;
pub mod window;

pub use aligner::{ConsumerStream, DataAligner, Delivery, WordKind};
pub use shifter::ShifterRecombiner;
pub use window::{bit_window, slice_at};
