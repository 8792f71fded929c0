//! Fixed-layout RIFF/WAV header parsing for raw 16-bit PCM streams.
//!
//! The header is decoded by explicit byte offset so the layout never
//! depends on in-memory struct packing. Only the leading `RIFF` tag and
//! the bit depth are validated; the inner format/data-chunk descriptors
//! are read as opaque padding, which keeps canonical minimal files and
//! sloppily-written ones equally acceptable.

use crate::error::DetectError;
use std::io::{ErrorKind, Read};


/// Size of the fixed header region: the 22-byte leading descriptor block,
/// the four format fields, and the 8-byte data-chunk descriptor. Sample
/// frames begin immediately after.
pub const HEADER_LEN: usize = 44;

/// Format parameters of a 16-bit PCM WAV stream, parsed once per stream
/// and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Interleaved channel count.
    pub channels: u16,
    /// Samples per second per channel.
    pub sample_rate: u32,
    /// Bytes per interleaved frame, taken as declared (not re-derived).
    pub frame_bytes: u16,
    /// Sample width in bits; only 16 is supported.
    pub bits_per_sample: u16,
}

/// Read and validate the fixed header region, leaving `source` positioned
/// at the first sample frame.
///
/// A stream shorter than [`HEADER_LEN`] or one whose first four bytes are
/// not `RIFF` fails with [`DetectError::NotRiff`]. On any failure the
/// stream position is undefined and the handle must not be reused.
pub fn parse_header<R: Read>(source: &mut R) -> Result<WavHeader, DetectError> {
    let mut raw = [0u8; HEADER_LEN];
    match source.read_exact(&mut raw) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::UnexpectedEof => return Err(DetectError::NotRiff),
        Err(err) => return Err(DetectError::Io(err)),
    }
    if &raw[0..4] != b"RIFF" {
        return Err(DetectError::NotRiff);
    }

    let channels = u16::from_le_bytes([raw[22], raw[23]]);
    let sample_rate = u32::from_le_bytes([raw[24], raw[25], raw[26], raw[27]]);
    // raw[28..32] holds the declared byte rate and raw[36..44] the
    // data-chunk descriptor; neither is trusted for anything.
    let frame_bytes = u16::from_le_bytes([raw[32], raw[33]]);
    let bits_per_sample = u16::from_le_bytes([raw[34], raw[35]]);

    if bits_per_sample != 16 {
        return Err(DetectError::UnsupportedBitDepth(bits_per_sample));
    }

    Ok(WavHeader {
        channels,
        sample_rate,
        frame_bytes,
        bits_per_sample,
    })
}
