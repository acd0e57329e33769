/// Canonical bus word width in bytes (512-bit data path).
pub const DEFAULT_BUS_WORD_BYTES: usize = 64;

/// First byte of a boundary word on the wire.
pub const BOUNDARY_MARKER: u8 = 0x00;

/// Bytes occupied by the boundary header: the marker plus a big-endian
/// u32 carry length. A segment tail can never declare fewer bytes than
/// this, so it is also the minimum legal carry length.
pub const BOUNDARY_HEADER_LEN: usize = 5;

/// Conventional filler byte for pre-stream noise and drain padding.
/// Leading filler establishes the initial misalignment; trailing filler
/// lets the final boundary word pass through the one-word carry.
pub const FILLER_BYTE: u8 = 0x11;
