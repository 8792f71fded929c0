//! Streaming silence-run scan over interleaved 16-bit PCM frames.
//!
//! One forward pass over the sample stream with O(1) state: quiet samples
//! extend the current run, loud samples close it, and a run that lasted at
//! least the configured minimum becomes a [`SilenceInterval`]. Samples are
//! counted per channel, so a gap must be quiet on every channel for its
//! full duration to qualify.

use crate::error::DetectError;
use crate::wav::{parse_header, WavHeader};
use std::io::{ErrorKind, Read};
use tracing::debug;


/// Default quiet threshold relative to full scale (dBFS).
pub const DEFAULT_THRESHOLD_DB: f32 = -40.0;

/// Default minimum silence gap duration in seconds.
pub const DEFAULT_MIN_SILENCE_SECS: f32 = 0.5;

/// Total byte budget for one block read. Blocks always hold a whole number
/// of frames; a frame is never split across reads.
const READ_BUDGET_BYTES: usize = 1024 * 1024;

/// Scan tunables. Any numeric value is accepted; out-of-range settings
/// degrade to "no gap qualifies" or "everything is quiet" rather than
/// erroring, so range policy belongs to the caller (see
/// [`DetectorConfig`](crate::config::DetectorConfig)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    /// Amplitude threshold in dBFS; a sample is quiet iff its absolute
    /// value is at or under the derived integer threshold.
    pub threshold_db: f32,
    /// Minimum duration a quiet run must last to be reported, in seconds.
    pub min_silence_secs: f32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            threshold_db: DEFAULT_THRESHOLD_DB,
            min_silence_secs: DEFAULT_MIN_SILENCE_SECS,
        }
    }
}

/// One maximal silence gap, in seconds from the first sample frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SilenceInterval {
    pub start: f32,
    pub end: f32,
}

impl SilenceInterval {
    pub fn duration(&self) -> f32 {
        self.end - self.start
    }

    /// Midpoint of the gap, the natural cut position when splitting.
    pub fn midpoint(&self) -> f32 {
        (self.start + self.end) / 2.0
    }
}

/// Parse the WAV header and scan the remaining stream in one call.
///
/// This is the primary entry point; the source is consumed to end of
/// stream on success. Intervals come back ordered by start time and
/// non-overlapping.
pub fn detect_silence<R: Read>(
    mut source: R,
    cfg: &ScanConfig,
) -> Result<Vec<SilenceInterval>, DetectError> {
    let header = parse_header(&mut source)?;
    scan_pcm(source, &header, cfg)
}

/// Scan an already-validated PCM stream for silence gaps.
///
/// `source` must be positioned at the first sample frame. Read failures
/// abort the scan with no partial result, since a truncated scan could
/// misreport an in-progress run as closed.
pub fn scan_pcm<R: Read>(
    mut source: R,
    header: &WavHeader,
    cfg: &ScanConfig,
) -> Result<Vec<SilenceInterval>, DetectError> {
    let channels = usize::from(header.channels).max(1);
    let frame_bytes = usize::from(header.frame_bytes).max(1);
    let rate = header.sample_rate as f32;

    // Both conversions truncate toward zero so interval boundaries are
    // reproducible across runs and platforms.
    let thresh = (2f32.powi(i32::from(header.bits_per_sample))
        * 10f32.powf(cfg.threshold_db / 20.0)) as i32;
    let min_run = (rate * cfg.min_silence_secs * channels as f32) as u64;

    debug!(
        "scanning for gaps: thresh={} min_run={} samples, {} ch @ {} Hz",
        thresh, min_run, channels, header.sample_rate
    );

    let frames_per_block = (READ_BUDGET_BYTES / frame_bytes).max(1);
    let mut buf = vec![0u8; frames_per_block * frame_bytes];

    let mut intervals = Vec::new();
    let mut frames_seen: u64 = 0;
    let mut run_samples: u64 = 0;
    let mut run_start: Option<f32> = None;

    loop {
        let filled = read_block(&mut source, &mut buf)?;
        let frames = filled / frame_bytes;
        if frames == 0 {
            // End of stream; a trailing partial frame is dropped.
            break;
        }
        let sample_count = (frames * channels).min(filled / 2);
        for i in 0..sample_count {
            let value = i16::from_le_bytes([buf[2 * i], buf[2 * i + 1]]);
            if i32::from(value).abs() <= thresh {
                if run_start.is_none() {
                    run_start =
                        Some((frames_seen as f32 + i as f32 / channels as f32) / rate);
                }
                run_samples += 1;
            } else {
                if let Some(start) = run_start.take() {
                    if run_samples >= min_run {
                        let end = (frames_seen as f32 + i as f32 / channels as f32) / rate;
                        intervals.push(SilenceInterval { start, end });
                    }
                }
                run_samples = 0;
            }
        }
        frames_seen += frames as u64;
    }

    // A qualifying run still open at end of stream flushes with a
    // whole-frame end timestamp.
    if let Some(start) = run_start {
        if run_samples >= min_run {
            intervals.push(SilenceInterval {
                start,
                end: frames_seen as f32 / rate,
            });
        }
    }

    debug!(
        "scan complete: {} gap(s) over {} frames",
        intervals.len(),
        frames_seen
    );
    Ok(intervals)
}

/// Fill `buf` with as many bytes as the source can provide, short only at
/// end of stream.
fn read_block<R: Read>(source: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}
