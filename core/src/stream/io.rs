//! Hex fixture I/O: one bus word per line, upper-case hex.
//!
//! This is the wire format the hardware testbenches exchange; the
//! engine itself only ever sees whole words.

use std::io::{BufRead, BufReader, Read, Write};

use crate::types::{AlignError, BusWord};

/// Read a whole fixture: one `width`-byte word per non-empty line.
pub fn read_hex_words<R: Read>(reader: R, width: usize) -> Result<Vec<BusWord>, AlignError> {
    let mut words = Vec::new();
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        words.push(decode_hex_line(text, width, index + 1)?);
    }
    Ok(words)
}

/// Decode one fixture line into a width-checked bus word.
pub(crate) fn decode_hex_line(
    text: &str,
    width: usize,
    line: usize,
) -> Result<BusWord, AlignError> {
    let bytes = hex::decode(text).map_err(|source| AlignError::Hex { line, source })?;
    if bytes.len() != width {
        return Err(AlignError::WidthMismatch {
            expected: width,
            actual: bytes.len(),
        });
    }
    Ok(BusWord::from(bytes))
}

/// Write one word as an upper-case hex line, matching the fixture
/// convention of the generators.
pub fn write_hex_word<W: Write>(writer: &mut W, word: &[u8]) -> Result<(), AlignError> {
    writer.write_all(hex::encode_upper(word).as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Write a whole word sequence, one line each.
pub fn write_hex_words<W: Write>(writer: &mut W, words: &[BusWord]) -> Result<(), AlignError> {
    for word in words {
        write_hex_word(writer, word)?;
    }
    Ok(())
}
