//! DataAligner orchestration.
//!
//! Drives the [`ShifterRecombiner`] across the raw word stream,
//! designates each segment's boundary word from the segment schedule,
//! applies the misalignment delta the boundary carries, and routes
//! every aligned word to the consumer that owns the current segment.

use crate::align::shifter::ShifterRecombiner;
use crate::boundary::{self, BoundarySignal};
use crate::constants::BOUNDARY_HEADER_LEN;
use crate::telemetry::TelemetryCounters;
use crate::types::{AlignError, BusWord};

/// Whether a delivered word is ordinary payload or the word that
/// terminates the segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
    Data,
    Boundary,
}

/// One aligned word routed to one consumer.
#[derive(Debug, Clone)]
pub struct Delivery {
    /// Cyclic consumer index owning the current segment.
    pub consumer: usize,
    /// Running segment number across all consumers.
    pub segment: usize,
    pub kind: WordKind,
    pub word: BusWord,
}

/// Ordered words delivered to one consumer: per segment, whole data
/// words followed by exactly one boundary word. Consumers strip bytes
/// `[5, L)` of each boundary word and must not read bytes `[L, W)`;
/// those belong to whichever consumer comes next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsumerStream {
    pub words: Vec<BusWord>,
}

/// The realignment orchestrator.
///
/// Exclusively owns the misalignment value and the raw-stream cursor.
/// The misalignment is the byte offset within the carried word pair at
/// which the active segment's next aligned word begins; a boundary
/// with carry length `L` advances it to `(m + L) mod W`.
#[derive(Debug)]
pub struct DataAligner {
    width: usize,
    num_consumers: usize,
    misalignment: usize,
    shifter: ShifterRecombiner,
    /// Set when the next aligned word still lies inside the carried
    /// pair after a boundary, so the next cycle consumes no input.
    stalled: bool,
    counters: TelemetryCounters,
}

impl DataAligner {
    pub fn new(
        width: usize,
        num_consumers: usize,
        initial_misalignment: usize,
    ) -> Result<Self, AlignError> {
        if width < BOUNDARY_HEADER_LEN {
            return Err(AlignError::InvalidWidth(width));
        }
        if num_consumers == 0 {
            return Err(AlignError::NoConsumers);
        }
        if initial_misalignment >= width {
            return Err(AlignError::InvalidMisalignment {
                misalignment: initial_misalignment,
                width,
            });
        }
        Ok(Self {
            width,
            num_consumers,
            misalignment: initial_misalignment,
            shifter: ShifterRecombiner::new(width),
            stalled: false,
            counters: TelemetryCounters::default(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn num_consumers(&self) -> usize {
        self.num_consumers
    }

    /// Current misalignment in bytes, `[0, width)`.
    pub fn misalignment(&self) -> usize {
        self.misalignment
    }

    pub fn counters(&self) -> &TelemetryCounters {
        &self.counters
    }

    /// Streaming core. `schedule[k]` is the number of full data words
    /// in segment `k`; segment `k` belongs to consumer
    /// `k % num_consumers`. Each segment is closed by one boundary
    /// word designated by position, never by content sniffing.
    ///
    /// `deliver` observes every aligned word in strict segment order.
    /// Raw words left over once the schedule is exhausted are trailing
    /// filler and are discarded.
    pub fn drive<I, F>(
        &mut self,
        raw: I,
        schedule: &[usize],
        mut deliver: F,
    ) -> Result<(), AlignError>
    where
        I: IntoIterator<Item = BusWord>,
        F: FnMut(Delivery) -> Result<(), AlignError>,
    {
        let mut raw = raw.into_iter();

        for (segment, &data_words) in schedule.iter().enumerate() {
            let consumer = segment % self.num_consumers;

            for _ in 0..data_words {
                let word = self.next_aligned(&mut raw, segment)?;
                self.counters.add_data_word(self.width);
                deliver(Delivery {
                    consumer,
                    segment,
                    kind: WordKind::Data,
                    word,
                })?;
            }

            let word = self.next_aligned(&mut raw, segment)?;
            let signal = boundary::expect_boundary(&word)?;
            self.counters.add_boundary_word(signal.carry());
            deliver(Delivery {
                consumer,
                segment,
                kind: WordKind::Boundary,
                word,
            })?;
            self.apply_boundary(&signal);
        }

        Ok(())
    }

    /// Collecting wrapper over [`drive`]: one [`ConsumerStream`] per
    /// consumer, in cyclic order.
    ///
    /// [`drive`]: DataAligner::drive
    pub fn run<I>(
        &mut self,
        raw: I,
        schedule: &[usize],
    ) -> Result<Vec<ConsumerStream>, AlignError>
    where
        I: IntoIterator<Item = BusWord>,
    {
        let mut streams = vec![ConsumerStream::default(); self.num_consumers];
        self.drive(raw, schedule, |delivery| {
            streams[delivery.consumer].words.push(delivery.word);
            Ok(())
        })?;
        Ok(streams)
    }

    /// Advance the misalignment past a processed boundary. When the
    /// next segment's first word is still covered by the carried pair
    /// the next cycle re-extracts instead of consuming input; the
    /// lookahead bytes that already travelled through the shifter are
    /// thereby re-read in the new phase rather than buffered.
    fn apply_boundary(&mut self, signal: &BoundarySignal) {
        let next = self.misalignment + signal.carry();
        if next < self.width {
            self.misalignment = next;
            self.stalled = true;
        } else {
            self.misalignment = next - self.width;
            self.stalled = false;
        }
    }

    fn next_aligned<I>(
        &mut self,
        raw: &mut I,
        segment: usize,
    ) -> Result<BusWord, AlignError>
    where
        I: Iterator<Item = BusWord>,
    {
        if self.stalled {
            self.stalled = false;
            self.counters.add_stall();
            return Ok(self.shifter.extract(self.misalignment));
        }

        if !self.shifter.primed() {
            let word = raw
                .next()
                .ok_or(AlignError::StreamUnderrun { segment })?;
            self.counters.add_raw_word();
            self.shifter.push(word)?;
        }

        let word = raw
            .next()
            .ok_or(AlignError::StreamUnderrun { segment })?;
        self.counters.add_raw_word();
        self.shifter.push(word)?;
        Ok(self.shifter.extract(self.misalignment))
    }
}
