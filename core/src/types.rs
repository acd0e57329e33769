use std::io;

use crate::boundary::BoundaryError;

/// One fixed-width word of the bus data path.
///
/// The width is carried by the engine that produced or consumes the
/// word, not by the type; every constructor in this crate checks it.
/// `Bytes` keeps hand-offs across pipeline channels allocation-free.
pub type BusWord = bytes::Bytes;

/// Unified engine error covering wire, orchestration, and I/O failures.
///
/// `From<T>` impls enable `?` across the pipeline. None of these are
/// transient: the input is a deterministic finite stream, so the only
/// recovery path is upstream correction of the stream.
#[derive(Debug, thiserror::Error)]
pub enum AlignError {
    /// A designated boundary word failed to decode, or its declared
    /// carry length is outside `[5, width]`. The stream position is no
    /// longer trustworthy past this point.
    #[error("malformed segment boundary: {0}")]
    MalformedSegmentLength(#[from] BoundaryError),

    /// Raw input ran out before the declared boundary of a segment was
    /// reached (including the drain padding the caller must supply for
    /// the final word).
    #[error("raw stream exhausted inside segment {segment}")]
    StreamUnderrun { segment: usize },

    /// A raw word did not match the configured bus width.
    #[error("bus word width mismatch: expected {expected} bytes, got {actual}")]
    WidthMismatch { expected: usize, actual: usize },

    /// Rejected orchestrator configuration.
    #[error("bus width {0} cannot hold a boundary header")]
    InvalidWidth(usize),

    /// Rejected orchestrator configuration.
    #[error("initial misalignment {misalignment} out of range for width {width}")]
    InvalidMisalignment { misalignment: usize, width: usize },

    /// Rejected orchestrator configuration.
    #[error("at least one consumer is required")]
    NoConsumers,

    /// Fixture line was not valid hex of the configured width.
    #[error("fixture line {line}: {source}")]
    Hex {
        line: usize,
        source: hex::FromHexError,
    },

    /// I/O error from a fixture reader or a consumer sink.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A pipeline stage disappeared (channel closed early).
    #[error("pipeline error: {0}")]
    Pipeline(&'static str),
}
