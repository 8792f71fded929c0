//! Caller-facing detector settings with serde defaults and validation.
//!
//! The scanner itself accepts any numeric parameters; range policy lives
//! here so embedding applications get readable errors before a scan runs.

use crate::scan::{ScanConfig, DEFAULT_MIN_SILENCE_SECS, DEFAULT_THRESHOLD_DB};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;


const DEFAULT_MAX_SEGMENT_SECS: f32 = 60.0;

/// Tunables for silence detection and segment planning.
///
/// Every field has a serde default, so a settings file only needs to
/// mention the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Silence threshold relative to full scale (dBFS).
    #[serde(default = "default_threshold_db")]
    pub threshold_db: f32,

    /// Minimum silence gap duration in seconds.
    #[serde(default = "default_min_silence_secs")]
    pub min_silence_secs: f32,

    /// Maximum planned segment length in seconds.
    #[serde(default = "default_max_segment_secs")]
    pub max_segment_secs: f32,
}

fn default_threshold_db() -> f32 {
    DEFAULT_THRESHOLD_DB
}

fn default_min_silence_secs() -> f32 {
    DEFAULT_MIN_SILENCE_SECS
}

fn default_max_segment_secs() -> f32 {
    DEFAULT_MAX_SEGMENT_SECS
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold_db: default_threshold_db(),
            min_silence_secs: default_min_silence_secs(),
            max_segment_secs: default_max_segment_secs(),
        }
    }
}

impl DetectorConfig {
    /// Load settings from a JSON file and validate them right away.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values before they reach the scanner or the planner.
    pub fn validate(&self) -> Result<()> {
        if !(-120.0..=0.0).contains(&self.threshold_db) {
            bail!(
                "threshold_db must be between -120.0 and 0.0 dBFS, got {}",
                self.threshold_db
            );
        }
        if self.min_silence_secs <= 0.0 {
            bail!(
                "min_silence_secs must be positive, got {}",
                self.min_silence_secs
            );
        }
        if self.max_segment_secs < self.min_silence_secs {
            bail!(
                "max_segment_secs ({}) must be at least min_silence_secs ({})",
                self.max_segment_secs,
                self.min_silence_secs
            );
        }
        Ok(())
    }

    /// Snapshot the scan-facing subset of these settings.
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            threshold_db: self.threshold_db,
            min_silence_secs: self.min_silence_secs,
        }
    }
}
