//! Boundary-signal wire codec.
//!
//! Responsibilities:
//! - Define the sentinel layout that terminates a consumer segment
//! - Encode boundary words with strict carry-length validation
//! - Decode boundary words the orchestrator designates by position
//!
//! Non-responsibilities:
//! - Deciding *which* word is a boundary (segment schedule, owned by
//!   the orchestrator)
//! - Misalignment arithmetic
//! - IO

pub mod decode;
pub mod encode;
pub mod types;

pub use decode::{decode_boundary, expect_boundary};
pub use encode::encode_boundary;
pub use types::{BoundaryError, BoundarySignal};
