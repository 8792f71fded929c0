//! Silence-gap detection and splitting for 16-bit PCM WAV streams.
//!
//! [`detect_silence`] scans a WAV byte source in a single streaming pass
//! and reports the gaps where the signal stays under a dBFS threshold for
//! a minimum duration. The [`split`] module turns those gaps into cut
//! positions and extracts segment files.

pub mod config;
pub mod error;
pub mod scan;
pub mod split;
mod telemetry;
pub mod wav;

pub use config::DetectorConfig;
pub use error::DetectError;
pub use scan::{detect_silence, scan_pcm, ScanConfig, SilenceInterval};
pub use split::{plan_segments, split_points, write_segments, Segment};
pub use telemetry::init_tracing;
pub use wav::{parse_header, WavHeader};
