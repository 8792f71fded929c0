use thiserror::Error;

/// Why detection failed before producing any intervals.
///
/// `NotRiff` and `UnsupportedBitDepth` mean the input itself is bad and a
/// retry cannot help; `Io` is the underlying reader failing and may be
/// transient (the caller decides whether reopening is worth it).
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("not a little-endian RIFF (WAV) stream")]
    NotRiff,
    #[error("unsupported bit depth {0}, only 16-bit samples are supported")]
    UnsupportedBitDepth(u16),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
