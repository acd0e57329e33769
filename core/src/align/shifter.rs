//! Stream transformer holding the two-word carry of the data path.
//!
//! One raw word in, one realigned word out once primed. The first
//! pushed word only fills the carry; the final logical word can only be
//! drained if the caller pads the raw stream past it (the fixture
//! builder always appends a filler word for exactly this reason).

use crate::align::window::slice_at;
use crate::types::{AlignError, BusWord};

/// Two-state carry: `Priming` until the first word arrives, then
/// `Streaming` forever. The orchestrator supplies the extraction
/// offset per cycle; the shifter itself holds no alignment state.
#[derive(Debug)]
pub struct ShifterRecombiner {
    width: usize,
    prev: Option<BusWord>,
    cur: Option<BusWord>,
}

impl ShifterRecombiner {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            prev: None,
            cur: None,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Rotate the next raw word into the carry. The first push primes
    /// the pipeline; from the second push onward [`extract`] is
    /// available after every push.
    ///
    /// [`extract`]: ShifterRecombiner::extract
    pub fn push(&mut self, word: BusWord) -> Result<(), AlignError> {
        if word.len() != self.width {
            return Err(AlignError::WidthMismatch {
                expected: self.width,
                actual: word.len(),
            });
        }
        self.prev = self.cur.take();
        self.cur = Some(word);
        Ok(())
    }

    /// True once two raw words are held and extraction is possible.
    pub fn primed(&self) -> bool {
        self.prev.is_some()
    }

    /// The aligned word beginning `offset` bytes into the carried
    /// pair. `offset` is the current misalignment: the count of bytes
    /// at the head of the older carried word that still belong to the
    /// previous consumer segment.
    ///
    /// The orchestrator may call this more than once per push: a
    /// segment handoff whose next word still lies inside the carried
    /// pair re-extracts at a larger offset without consuming input
    /// (the stall cycle of the hardware pipeline).
    ///
    /// Panics if the pipeline is not primed or `offset` is outside
    /// `[0, width)` — both internal contract violations.
    pub fn extract(&self, offset: usize) -> BusWord {
        assert!(offset < self.width, "misalignment {offset} out of range");
        let prev = self.prev.as_ref().expect("extract before priming");
        let cur = self.cur.as_ref().expect("extract before priming");
        slice_at(prev, cur, offset)
    }
}
