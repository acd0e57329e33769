//! Byte-offset extraction over a pair of consecutive bus words.
//!
//! The data path never sees partial words, so re-alignment is always a
//! fixed-width slice of the concatenation of two neighbouring raw
//! words. Both entry points are pure; neither holds state.

use crate::types::BusWord;

/// Slice `[offset, offset + W)` of `prev ∥ cur`, where `W` is the bus
/// width shared by both words. `offset` may range over `[0, W]`:
/// `0` yields `prev` unchanged, `W` yields `cur` unchanged.
///
/// Panics if the words differ in width or `offset` is out of range;
/// both are programming-contract violations, never induced by wire
/// data.
pub fn slice_at(prev: &[u8], cur: &[u8], offset: usize) -> BusWord {
    let width = prev.len();
    assert_eq!(width, cur.len(), "bus word pair must share one width");
    assert!(offset <= width, "window offset {offset} out of range [0, {width}]");

    let mut out = Vec::with_capacity(width);
    out.extend_from_slice(&prev[offset..]);
    out.extend_from_slice(&cur[..offset]);
    BusWord::from(out)
}

/// The bit-window extraction of the shifter data path: the `W`-byte
/// slice of `prev ∥ cur` beginning `W - m` bytes into `prev`, for a
/// shift `m` in `[0, W)`.
///
/// `m = 0` returns `cur` unchanged.
pub fn bit_window(prev: &[u8], cur: &[u8], m: usize) -> BusWord {
    let width = prev.len();
    assert!(m < width, "window shift {m} out of range [0, {width})");
    slice_at(prev, cur, width - m)
}
