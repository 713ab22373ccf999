use serde::{Deserialize, Serialize};

use crate::compress::{BrotliCompressor, CompressorKind};
use crate::encode::EncoderKind;
use crate::error::Result;
use crate::spectrum::SpectrumCodecKind;

use super::CompressionPipeline;

/// Choice of stages for a [`CompressionPipeline`].
///
/// A plain value: callers construct one (usually from a preset or a config
/// file) and call [`PipelineConfig::build`] where they need a pipeline.
///
/// ```toml
/// [pipeline]
/// tagged = true
/// spectrum = { kind = "f32-lossy", bits = 8 }
/// compressor = { kind = "gzip", level = 9 }
/// encoder = { kind = "base85" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Spectrum codec stage
    pub spectrum: SpectrumCodecKind,
    /// Byte compressor stage
    pub compressor: CompressorKind,
    /// Text encoder stage
    pub encoder: EncoderKind,
    /// Prefix tokens with the format identifier
    pub tagged: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::url()
    }
}

impl PipelineConfig {
    /// Lossless f32 codec, Brotli, URL-safe base64
    pub fn url() -> Self {
        Self {
            spectrum: SpectrumCodecKind::F32,
            compressor: CompressorKind::Brotli {
                quality: BrotliCompressor::default_quality(),
            },
            encoder: EncoderKind::UrlSafeBase64,
            tagged: false,
        }
    }

    /// Lossless f32 codec, Brotli, base85
    pub fn b85() -> Self {
        Self {
            encoder: EncoderKind::Base85,
            ..Self::url()
        }
    }

    /// Lossless f32 codec with LZ-string doing both compression and URI encoding
    pub fn lzstring_uri() -> Self {
        Self {
            compressor: CompressorKind::None,
            encoder: EncoderKind::LzStringUri,
            ..Self::url()
        }
    }

    /// Same configuration with tagging set
    pub fn with_tag(self, tagged: bool) -> Self {
        Self { tagged, ..self }
    }

    /// Every combination of default-parameter stage kinds, untagged
    pub fn combinations() -> Vec<Self> {
        let mut configs = Vec::new();
        for spectrum in SpectrumCodecKind::all() {
            for compressor in CompressorKind::all() {
                for encoder in EncoderKind::all() {
                    configs.push(Self {
                        spectrum,
                        compressor,
                        encoder,
                        tagged: false,
                    });
                }
            }
        }
        configs
    }

    /// Whether the stages can carry every payload.
    ///
    /// The pass-through text encoder only accepts UTF-8, which compressed
    /// output generally is not.
    pub fn is_viable(&self) -> bool {
        self.encoder != EncoderKind::Passthrough || self.compressor == CompressorKind::None
    }

    /// Instantiate the pipeline, validating every stage's parameters
    pub fn build(&self) -> Result<CompressionPipeline> {
        Ok(CompressionPipeline::new(
            self.spectrum.build()?,
            self.compressor.build()?,
            self.encoder.build(),
        )
        .with_tag(self.tagged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Root {
        pipeline: PipelineConfig,
    }

    #[test]
    fn test_presets_format_ids() {
        let ids: Vec<String> = [
            PipelineConfig::url(),
            PipelineConfig::b85(),
            PipelineConfig::lzstring_uri(),
        ]
        .iter()
        .map(|config| config.build().unwrap().format_id())
        .collect();
        assert_eq!(
            ids,
            vec![
                "f32_brotli_url-safe-base64",
                "f32_brotli_base85",
                "f32_none_lz-string-uri"
            ]
        );
        assert_eq!(PipelineConfig::default(), PipelineConfig::url());
    }

    #[test]
    fn test_parse_toml_table() {
        let root: Root = toml::from_str(
            r#"
            [pipeline]
            tagged = true
            spectrum = { kind = "f32-lossy", bits = 8 }
            compressor = { kind = "gzip", level = 9 }
            encoder = { kind = "base85" }
            "#,
        )
        .unwrap();
        assert_eq!(
            root.pipeline,
            PipelineConfig {
                spectrum: SpectrumCodecKind::F32Lossy { bits: 8 },
                compressor: CompressorKind::Gzip { level: 9 },
                encoder: EncoderKind::Base85,
                tagged: true,
            }
        );
    }

    #[test]
    fn test_missing_fields_fall_back_to_url_preset() {
        let root: Root = toml::from_str(
            r#"
            [pipeline]
            encoder = { kind = "lz-string" }
            "#,
        )
        .unwrap();
        assert_eq!(root.pipeline.spectrum, SpectrumCodecKind::F32);
        assert_eq!(root.pipeline.compressor, CompressorKind::default());
        assert_eq!(root.pipeline.encoder, EncoderKind::LzString);
        assert!(!root.pipeline.tagged);
    }

    #[test]
    fn test_combinations_cover_every_stage() {
        let combos = PipelineConfig::combinations();
        assert_eq!(combos.len(), 4 * 4 * 5);
        assert_eq!(combos.iter().filter(|c| !c.is_viable()).count(), 4 * 3);
    }

    #[test]
    fn test_build_rejects_bad_parameters() {
        let config = PipelineConfig {
            compressor: CompressorKind::Gzip { level: 42 },
            ..PipelineConfig::url()
        };
        assert!(config.build().is_err());
    }
}
