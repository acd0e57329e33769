use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;

use crate::boundary::types::{BoundaryError, BoundarySignal};
use crate::constants::{BOUNDARY_HEADER_LEN, BOUNDARY_MARKER};

/// Content probe: `Some` only when the word begins with the 0x00
/// marker and declares a carry length inside `[5, W]`.
///
/// Ordinary payload may legitimately start with a zero byte, so the
/// protocol never identifies boundaries by scanning: the orchestrator
/// knows from its segment schedule exactly which word closes a
/// segment and uses [`expect_boundary`] on that word alone. This probe
/// exists for diagnostics and fixtures.
pub fn decode_boundary(word: &[u8]) -> Option<BoundarySignal> {
    expect_boundary(word).ok()
}

/// Decode a word the orchestrator has designated as a segment
/// boundary. Any failure here means the stream position is no longer
/// trustworthy.
pub fn expect_boundary(word: &[u8]) -> Result<BoundarySignal, BoundaryError> {
    if word.len() < BOUNDARY_HEADER_LEN {
        return Err(BoundaryError::Truncated(word.len()));
    }
    if word[0] != BOUNDARY_MARKER {
        return Err(BoundaryError::MissingMarker(word[0]));
    }

    let carry_len = BigEndian::read_u32(&word[1..BOUNDARY_HEADER_LEN]);
    let carry = carry_len as usize;
    if carry < BOUNDARY_HEADER_LEN || carry > word.len() {
        return Err(BoundaryError::CarryOutOfRange {
            len: carry_len,
            width: word.len(),
        });
    }

    Ok(BoundarySignal {
        carry_len,
        lookahead: Bytes::copy_from_slice(&word[carry..]),
    })
}
