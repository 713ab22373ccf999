//! TOML configuration file support.
//!
//! Instead of picking a preset, users can describe every stage in a file:
//!
//! ```toml
//! # mztoken.toml
//! [pipeline]
//! tagged = true
//! spectrum = { kind = "f32-lossy", bits = 8 }
//! compressor = { kind = "gzip", level = 9 }
//! encoder = { kind = "base85" }
//! ```
//!
//! Fields left out keep the value of the selected preset.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use mztoken::compress::CompressorKind;
use mztoken::encode::EncoderKind;
use mztoken::pipeline::PipelineConfig;
use mztoken::spectrum::SpectrumCodecKind;

/// Root configuration structure for mztoken.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Pipeline stage settings.
    #[serde(default)]
    pub pipeline: PipelineSection,
}

/// Per-stage overrides; `None` keeps the preset's choice.
#[derive(Debug, Default, Deserialize)]
pub struct PipelineSection {
    /// Spectrum codec kind and parameters.
    pub spectrum: Option<SpectrumCodecKind>,

    /// Byte compressor kind and parameters.
    pub compressor: Option<CompressorKind>,

    /// Text encoder kind.
    pub encoder: Option<EncoderKind>,

    /// Prefix tokens with their format identifier.
    pub tagged: Option<bool>,
}

impl PipelineSection {
    /// Overlay the file's settings on `base`.
    pub fn apply(&self, base: PipelineConfig) -> PipelineConfig {
        PipelineConfig {
            spectrum: self.spectrum.unwrap_or(base.spectrum),
            compressor: self.compressor.unwrap_or(base.compressor),
            encoder: self.encoder.unwrap_or(base.encoder),
            tagged: self.tagged.unwrap_or(base.tagged),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
