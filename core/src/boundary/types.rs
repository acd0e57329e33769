use bytes::Bytes;

use crate::constants::BOUNDARY_HEADER_LEN;

/// Decoded contents of a boundary word.
///
/// Wire layout within one aligned word of width `W`:
///
/// ```text
/// [ marker 0x00        (1) ]
/// [ carry length L, BE (4) ]
/// [ zero padding     (L-5) ]
/// [ lookahead        (W-L) ]
/// ```
///
/// The first `L` bytes (header plus padding) belong to the consumer
/// whose segment the word terminates; the remaining `W - L` bytes are
/// the head of the next segment in cyclic consumer order and must not
/// be interpreted by the terminated consumer. `L == 5` means the tail
/// carries no residual data at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundarySignal {
    /// Declared byte count `L`, header included. `5 ≤ L ≤ W`.
    pub carry_len: u32,

    /// Bytes `[L, W)` of the word: the next segment's head, already on
    /// the wire because delivery is word-granular.
    pub lookahead: Bytes,
}

impl BoundarySignal {
    /// Misalignment delta this boundary applies: the new misalignment
    /// is `(m + carry_len) mod W`.
    pub fn carry(&self) -> usize {
        self.carry_len as usize
    }
}

/// Errors raised while constructing or force-decoding a boundary word.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundaryError {
    /// Declared `L` outside `[5, width]`.
    #[error("carry length {len} out of range [{BOUNDARY_HEADER_LEN}, {width}]")]
    CarryOutOfRange { len: u32, width: usize },

    /// A word designated as a boundary does not begin with the 0x00
    /// marker.
    #[error("designated boundary word starts with 0x{0:02x}, not the 0x00 marker")]
    MissingMarker(u8),

    /// Word too short to hold the 5-byte header.
    #[error("word of {0} bytes cannot hold a boundary header")]
    Truncated(usize),

    /// Lookahead longer than the `width - carry_len` bytes left in the
    /// word.
    #[error("lookahead of {len} bytes exceeds the {room} bytes after carry length {carry_len}")]
    LookaheadOverflow {
        len: usize,
        room: usize,
        carry_len: u32,
    },
}
