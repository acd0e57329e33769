//! Pure pipeline wiring (no alignment logic).
//!
//! Reader thread → bounded raw-word channel → orchestrator → one
//! bounded FIFO channel and writer thread per consumer. Ordering is
//! segment-scoped by construction: the single orchestrator sends every
//! consumer's words in delivery order, and each consumer drains its
//! own channel alone.

use std::io::{BufRead, BufReader, Read, Write};
use std::thread;

use crossbeam::channel::bounded;

use crate::align::DataAligner;
use crate::stream::io::{decode_hex_line, write_hex_word};
use crate::telemetry::TelemetrySnapshot;
use crate::types::{AlignError, BusWord};

/// Wiring parameters for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Bus word width in bytes.
    pub width: usize,
    /// Misalignment implied by the leading filler of the raw stream.
    pub initial_misalignment: usize,
    /// Full-data-word count per segment, cyclic consumer order.
    pub schedule: Vec<usize>,
    /// Capacity of every bounded channel, in words.
    pub channel_depth: usize,
}

impl PipelineOptions {
    pub fn new(width: usize, initial_misalignment: usize, schedule: Vec<usize>) -> Self {
        Self {
            width,
            initial_misalignment,
            schedule,
            channel_depth: 64,
        }
    }
}

/// Run the full realignment pipeline: hex words in from `reader`, hex
/// words out to one writer per consumer.
///
/// Consumer count is `writers.len()`. Returns the telemetry snapshot
/// of the completed run.
pub fn run_align_pipeline<R, W>(
    reader: R,
    writers: Vec<W>,
    opts: &PipelineOptions,
) -> Result<TelemetrySnapshot, AlignError>
where
    R: Read + Send,
    W: Write + Send,
{
    let num_consumers = writers.len();
    let mut aligner = DataAligner::new(opts.width, num_consumers, opts.initial_misalignment)?;
    let width = opts.width;

    let (raw_tx, raw_rx) = bounded::<BusWord>(opts.channel_depth);
    let mut cons_txs = Vec::with_capacity(num_consumers);
    let mut cons_rxs = Vec::with_capacity(num_consumers);
    for _ in 0..num_consumers {
        let (tx, rx) = bounded::<BusWord>(opts.channel_depth);
        cons_txs.push(tx);
        cons_rxs.push(rx);
    }

    thread::scope(|scope| -> Result<(), AlignError> {
        // ---- Reader thread ----
        let reader_handle = scope.spawn(move || -> Result<(), AlignError> {
            for (index, line) in BufReader::new(reader).lines().enumerate() {
                let line = line?;
                let text = line.trim();
                if text.is_empty() {
                    continue;
                }
                let word = decode_hex_line(text, width, index + 1)?;
                if raw_tx.send(word).is_err() {
                    // Orchestrator already drained everything the
                    // schedule needs; the rest is trailing filler.
                    return Ok(());
                }
            }
            Ok(())
        });

        // ---- Per-consumer writer threads ----
        let mut writer_handles = Vec::with_capacity(num_consumers);
        for (rx, mut writer) in cons_rxs.into_iter().zip(writers) {
            writer_handles.push(scope.spawn(move || -> Result<(), AlignError> {
                for word in rx.iter() {
                    write_hex_word(&mut writer, &word)?;
                }
                writer.flush()?;
                Ok(())
            }));
        }

        // ---- Orchestrator on the scope thread ----
        let drive_result = aligner.drive(raw_rx.iter(), &opts.schedule, |delivery| {
            cons_txs[delivery.consumer]
                .send(delivery.word)
                .map_err(|_| AlignError::Pipeline("consumer channel closed"))
        });
        drop(cons_txs);
        drop(raw_rx);

        // A reader failure starves the orchestrator into an underrun,
        // so the reader's own error takes precedence.
        reader_handle
            .join()
            .map_err(|_| AlignError::Pipeline("reader stage panicked"))??;
        drive_result?;
        for handle in writer_handles {
            handle
                .join()
                .map_err(|_| AlignError::Pipeline("writer stage panicked"))??;
        }
        Ok(())
    })?;

    Ok(TelemetrySnapshot::from_counters(
        aligner.counters(),
        num_consumers,
    ))
}
