//! Stream plumbing around the realignment core.
//!
//! Responsibilities:
//! - Hex fixture I/O (one word per line)
//! - Channel pipeline wiring for concurrent consumers
//!
//! Non-responsibilities:
//! - Alignment semantics (see [`crate::align`])
//! - Boundary wire layout (see [`crate::boundary`])

pub mod io;
pub mod pipeline;

pub use io::{read_hex_words, write_hex_word, write_hex_words};
pub use pipeline::{run_align_pipeline, PipelineOptions};
