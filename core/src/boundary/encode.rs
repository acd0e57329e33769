use byteorder::{BigEndian, ByteOrder};

use crate::boundary::types::BoundaryError;
use crate::constants::{BOUNDARY_HEADER_LEN, BOUNDARY_MARKER};
use crate::types::BusWord;

/// Build the canonical boundary word for a segment tail of `carry_len`
/// bytes, splicing in up to `width - carry_len` bytes of the next
/// segment's data.
///
/// If the next segment's data is not yet available the lookahead
/// region is zero-filled; a shorter `lookahead` fills from the front.
pub fn encode_boundary(
    carry_len: u32,
    lookahead: &[u8],
    width: usize,
) -> Result<BusWord, BoundaryError> {
    let carry = carry_len as usize;
    if carry < BOUNDARY_HEADER_LEN || carry > width {
        return Err(BoundaryError::CarryOutOfRange {
            len: carry_len,
            width,
        });
    }

    let room = width - carry;
    if lookahead.len() > room {
        return Err(BoundaryError::LookaheadOverflow {
            len: lookahead.len(),
            room,
            carry_len,
        });
    }

    let mut word = vec![0u8; width];
    word[0] = BOUNDARY_MARKER;
    BigEndian::write_u32(&mut word[1..BOUNDARY_HEADER_LEN], carry_len);
    // bytes [5, carry) stay zero: dead padding owned by the closing consumer
    word[carry..carry + lookahead.len()].copy_from_slice(lookahead);
    Ok(BusWord::from(word))
}
