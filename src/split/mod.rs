//! Segment planning and extraction around detected silence gaps.
//!
//! Every gap contributes its midpoint as a candidate cut position. The
//! planner walks those positions greedily, letting a segment absorb as
//! many as possible before it would exceed the length budget; a single
//! span already over budget becomes its own oversized segment, since
//! there is no quieter place to cut it. Planned segments are then copied
//! out of the source WAV as numbered files.

use crate::scan::SilenceInterval;
use anyhow::{Context, Result};
use hound::{WavReader, WavWriter};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;


/// One planned output chunk of the source stream, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: f32,
    pub end: f32,
}

impl Segment {
    pub fn duration(&self) -> f32 {
        self.end - self.start
    }
}

/// Candidate cut positions: stream start, the midpoint of every silence
/// gap, stream end.
pub fn split_points(intervals: &[SilenceInterval], total_secs: f32) -> Vec<f32> {
    let mut points = Vec::with_capacity(intervals.len() + 2);
    points.push(0.0);
    points.extend(intervals.iter().map(SilenceInterval::midpoint));
    points.push(total_secs);
    points
}

/// Plan segments over the cut positions so each stays within
/// `max_segment_secs` wherever the gaps allow it.
///
/// Fewer than two positions yields an empty plan.
pub fn plan_segments(points: &[f32], max_segment_secs: f32) -> Vec<Segment> {
    let mut segments = Vec::new();
    if points.len() < 2 {
        return segments;
    }

    let mut last = 0;
    for i in 1..points.len() {
        if points[i] - points[last] > max_segment_secs {
            if last != i - 1 {
                segments.push(Segment {
                    start: points[last],
                    end: points[i - 1],
                });
                last = i - 1;
            }
            if points[i] - points[i - 1] > max_segment_secs {
                segments.push(Segment {
                    start: points[i - 1],
                    end: points[i],
                });
                last = i;
            }
        }
    }
    if last != points.len() - 1 {
        segments.push(Segment {
            start: points[last],
            end: points[points.len() - 1],
        });
    }
    segments
}

/// Total duration of a WAV file in seconds (frames over sample rate).
pub fn wav_duration_secs(path: &Path) -> Result<f32> {
    let reader = WavReader::open(path)
        .with_context(|| format!("failed to open WAV file {}", path.display()))?;
    let spec = reader.spec();
    Ok(reader.duration() as f32 / spec.sample_rate as f32)
}

/// Extract each planned segment of `input` into `out_dir/{index:05}.wav`,
/// preserving the source sample spec. Returns the written paths in order.
pub fn write_segments(input: &Path, out_dir: &Path, segments: &[Segment]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let mut reader = WavReader::open(input)
        .with_context(|| format!("failed to open WAV file {}", input.display()))?;
    let spec = reader.spec();
    let total_frames = reader.duration();

    let mut written = Vec::with_capacity(segments.len());
    for (index, segment) in segments.iter().enumerate() {
        let start_frame = ((segment.start * spec.sample_rate as f32) as u32).min(total_frames);
        let end_frame = ((segment.end * spec.sample_rate as f32) as u32).min(total_frames);
        let frames = end_frame.saturating_sub(start_frame);

        reader.seek(start_frame).with_context(|| {
            format!(
                "failed to seek to frame {start_frame} in {}",
                input.display()
            )
        })?;

        let path = out_dir.join(format!("{index:05}.wav"));
        let mut writer = WavWriter::create(&path, spec)
            .with_context(|| format!("failed to create segment file {}", path.display()))?;
        let mut samples = reader.samples::<i16>();
        for _ in 0..frames as usize * usize::from(spec.channels) {
            match samples.next() {
                Some(sample) => {
                    let sample = sample
                        .with_context(|| format!("failed to read sample from {}", input.display()))?;
                    writer.write_sample(sample)?;
                }
                None => break,
            }
        }
        writer
            .finalize()
            .with_context(|| format!("failed to finalize segment file {}", path.display()))?;
        info!("wrote segment {} ({:.3} s)", path.display(), segment.duration());
        written.push(path);
    }
    Ok(written)
}
