//! Deterministic test-vector builder.
//!
//! Builds, from per-consumer segment payloads, the continuous
//! misaligned byte stream (leading filler for the initial
//! misalignment, trailing filler so the final boundary can drain
//! through the one-word carry) sliced into raw bus words, together
//! with the aligned words each consumer must receive back — full
//! boundary words included, lookahead and all. Round-trip tests and
//! the benchmark are driven from here.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use byteorder::{BigEndian, ByteOrder};

use crate::align::ConsumerStream;
use crate::boundary::BoundaryError;
use crate::constants::{BOUNDARY_HEADER_LEN, BOUNDARY_MARKER, FILLER_BYTE};
use crate::types::{AlignError, BusWord};

struct SegmentSpec {
    data: Vec<Vec<u8>>,
    carry_len: usize,
}

/// A complete generated vector: raw input words, the expected
/// per-consumer outputs, and the segment schedule that drives the
/// orchestrator.
#[derive(Debug, Clone)]
pub struct FixtureStream {
    pub width: usize,
    pub initial_misalignment: usize,
    pub raw_words: Vec<BusWord>,
    pub expected: Vec<ConsumerStream>,
    pub schedule: Vec<usize>,
}

impl FixtureStream {
    /// The raw stream in fixture file form: one upper-case hex word
    /// per line.
    pub fn hex_input(&self) -> String {
        let mut out = String::new();
        for word in &self.raw_words {
            out.push_str(&hex::encode_upper(word));
            out.push('\n');
        }
        out
    }
}

/// Accumulates segments in cyclic consumer order, then lays out the
/// wire stream.
pub struct StreamBuilder {
    width: usize,
    initial_misalignment: usize,
    segments: Vec<SegmentSpec>,
}

impl StreamBuilder {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            initial_misalignment: 0,
            segments: Vec::new(),
        }
    }

    /// Bytes of leading filler, which is also the initial misalignment
    /// the orchestrator must be started with.
    pub fn initial_misalignment(mut self, misalignment: usize) -> Self {
        self.initial_misalignment = misalignment;
        self
    }

    /// Append one segment: `data_words` full words of payload followed
    /// by a tail declaring `carry_len` bytes (header included).
    /// Segment order is cyclic consumer order, exactly as appended.
    pub fn segment(mut self, data_words: Vec<Vec<u8>>, carry_len: usize) -> Self {
        self.segments.push(SegmentSpec {
            data: data_words,
            carry_len,
        });
        self
    }

    pub fn build(self, num_consumers: usize) -> Result<FixtureStream, AlignError> {
        let width = self.width;
        if width < BOUNDARY_HEADER_LEN {
            return Err(AlignError::InvalidWidth(width));
        }
        if num_consumers == 0 {
            return Err(AlignError::NoConsumers);
        }
        if self.initial_misalignment >= width {
            return Err(AlignError::InvalidMisalignment {
                misalignment: self.initial_misalignment,
                width,
            });
        }

        let mut stream = vec![FILLER_BYTE; self.initial_misalignment];
        let mut boundary_starts = Vec::with_capacity(self.segments.len());
        let mut schedule = Vec::with_capacity(self.segments.len());

        for spec in &self.segments {
            if spec.carry_len < BOUNDARY_HEADER_LEN || spec.carry_len > width {
                return Err(AlignError::MalformedSegmentLength(
                    BoundaryError::CarryOutOfRange {
                        len: spec.carry_len as u32,
                        width,
                    },
                ));
            }
            boundary_starts.push(stream.len() + spec.data.len() * width);
            schedule.push(spec.data.len());

            for word in &spec.data {
                if word.len() != width {
                    return Err(AlignError::WidthMismatch {
                        expected: width,
                        actual: word.len(),
                    });
                }
                stream.extend_from_slice(word);
            }

            // Segment tail: marker, big-endian carry length, dead zeros.
            let mut tail = vec![0u8; spec.carry_len];
            tail[0] = BOUNDARY_MARKER;
            BigEndian::write_u32(&mut tail[1..BOUNDARY_HEADER_LEN], spec.carry_len as u32);
            stream.extend_from_slice(&tail);
        }

        // Pad to a whole word, then one extra filler word so the final
        // boundary can pass through the shifter's carry.
        let partial = stream.len() % width;
        if partial != 0 {
            stream.resize(stream.len() + width - partial, FILLER_BYTE);
        }
        stream.resize(stream.len() + width, FILLER_BYTE);

        let raw_words = stream
            .chunks(width)
            .map(BusWord::copy_from_slice)
            .collect();

        let mut expected = vec![ConsumerStream::default(); num_consumers];
        for (index, (spec, &start)) in self.segments.iter().zip(&boundary_starts).enumerate() {
            let consumer = index % num_consumers;
            let words = &mut expected[consumer].words;
            for word in &spec.data {
                words.push(BusWord::copy_from_slice(word));
            }
            words.push(BusWord::copy_from_slice(&stream[start..start + width]));
        }

        Ok(FixtureStream {
            width,
            initial_misalignment: self.initial_misalignment,
            raw_words,
            expected,
            schedule,
        })
    }
}

/// Seeded random vector in the shape the original generators produce:
/// `blocks_per_consumer` rounds of one segment per consumer, each with
/// up to `max_words_per_block` full data words and a random carry
/// length.
pub fn random_fixture(
    width: usize,
    num_consumers: usize,
    blocks_per_consumer: usize,
    max_words_per_block: usize,
    seed: u64,
) -> Result<FixtureStream, AlignError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder =
        StreamBuilder::new(width).initial_misalignment(rng.gen_range(0..width));

    for _ in 0..blocks_per_consumer {
        for _ in 0..num_consumers {
            let words = rng.gen_range(0..=max_words_per_block);
            let data = (0..words)
                .map(|_| (0..width).map(|_| rng.gen::<u8>()).collect())
                .collect();
            let carry_len = rng.gen_range(BOUNDARY_HEADER_LEN..=width);
            builder = builder.segment(data, carry_len);
        }
    }
    builder.build(num_consumers)
}
