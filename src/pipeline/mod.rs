//! # Compression Pipeline
//!
//! Composes the three stages into a single compress/decompress contract:
//!
//! ```text
//! (mz, intensity) -> SpectrumCodec -> UTF-8 bytes -> ByteCompressor -> TextEncoder -> token
//! ```
//!
//! Any combination of stages forms a valid format, but a token only decodes
//! with the combination that produced it. Untagged tokens carry no marker of
//! that combination; tagged tokens prefix the body with
//! [`CompressionPipeline::format_id`] and a `.` so a mismatch is reported as
//! [`CodecError::FormatMismatch`] instead of surfacing from an inner stage.
//!
//! ## Example
//!
//! ```
//! use mztoken::pipeline::PipelineConfig;
//!
//! let pipeline = PipelineConfig::url().build()?;
//! let token = pipeline.compress(&[100.0, 200.0], &[10.0, 20.0])?;
//! let (mz, intensity) = pipeline.decompress(&token)?;
//! assert_eq!(mz, vec![100.0, 200.0]);
//! assert_eq!(intensity, vec![10.0, 20.0]);
//! # Ok::<(), mztoken::CodecError>(())
//! ```

mod config;


use log::{debug, trace};

pub use config::PipelineConfig;

use crate::compress::ByteCompressor;
use crate::encode::TextEncoder;
use crate::error::{CodecError, Result};
use crate::spectrum::{SpectrumArrays, SpectrumCodec};

/// Separates the format tag from the token body
pub const TAG_SEPARATOR: char = '.';

/// Spectrum codec, byte compressor and text encoder applied in sequence.
///
/// The stage types default to boxed trait objects, which is what
/// [`PipelineConfig::build`] produces. Concrete stage types can be used for
/// static dispatch.
pub struct CompressionPipeline<
    S = Box<dyn SpectrumCodec>,
    C = Box<dyn ByteCompressor>,
    E = Box<dyn TextEncoder>,
> {
    spectrum: S,
    compressor: C,
    encoder: E,
    tagged: bool,
}

impl<S, C, E> CompressionPipeline<S, C, E>
where
    S: SpectrumCodec,
    C: ByteCompressor,
    E: TextEncoder,
{
    /// Compose an untagged pipeline from its stages
    pub fn new(spectrum: S, compressor: C, encoder: E) -> Self {
        Self {
            spectrum,
            compressor,
            encoder,
            tagged: false,
        }
    }

    /// Enable or disable the format tag prefix
    pub fn with_tag(mut self, tagged: bool) -> Self {
        self.tagged = tagged;
        self
    }

    /// Whether tokens carry a format tag
    pub fn is_tagged(&self) -> bool {
        self.tagged
    }

    /// The spectrum codec stage
    pub fn spectrum_codec(&self) -> &S {
        &self.spectrum
    }

    /// The byte compressor stage
    pub fn compressor(&self) -> &C {
        &self.compressor
    }

    /// The text encoder stage
    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Whether decompression reproduces the input exactly
    pub fn is_lossless(&self) -> bool {
        self.spectrum.is_lossless()
    }

    /// Identifier of this stage combination, e.g. `f32_brotli_url-safe-base64`
    pub fn format_id(&self) -> String {
        format!(
            "{}_{}_{}",
            self.spectrum.name(),
            self.compressor.name(),
            self.encoder.name()
        )
    }

    /// Encode a spectrum into a token
    pub fn compress(&self, mz: &[f32], intensity: &[f32]) -> Result<String> {
        let payload = self.spectrum.encode(mz, intensity)?;
        let compressed = self.compressor.compress(payload.as_bytes())?;
        let body = self.encoder.encode(&compressed)?;

        debug!(
            "{}: {} peaks -> payload {} B -> compressed {} B -> token {} chars",
            self.format_id(),
            mz.len(),
            payload.len(),
            compressed.len(),
            body.len()
        );

        if self.tagged {
            Ok(format!("{}{}{}", self.format_id(), TAG_SEPARATOR, body))
        } else {
            Ok(body)
        }
    }

    /// Decode a token produced by a pipeline with the same configuration
    pub fn decompress(&self, token: &str) -> Result<(Vec<f32>, Vec<f32>)> {
        let body = if self.tagged {
            self.strip_tag(token)?
        } else {
            token
        };

        let compressed = self.encoder.decode(body)?;
        let bytes = self.compressor.decompress(&compressed)?;
        trace!(
            "token {} chars -> compressed {} B -> payload {} B",
            body.len(),
            compressed.len(),
            bytes.len()
        );

        let payload = String::from_utf8(bytes)
            .map_err(|e| CodecError::decode(format!("payload is not UTF-8: {}", e)))?;
        self.spectrum.decode(&payload)
    }

    /// [`Self::compress`] for a [`SpectrumArrays`]
    pub fn compress_spectrum(&self, spectrum: &SpectrumArrays) -> Result<String> {
        self.compress(&spectrum.mz, &spectrum.intensity)
    }

    /// [`Self::decompress`] into a [`SpectrumArrays`]
    pub fn decompress_spectrum(&self, token: &str) -> Result<SpectrumArrays> {
        self.decompress(token).map(SpectrumArrays::from)
    }

    fn strip_tag<'a>(&self, token: &'a str) -> Result<&'a str> {
        let (tag, body) = token.split_once(TAG_SEPARATOR).ok_or_else(|| {
            CodecError::malformed(format!(
                "token has no format tag, expected `{}{}` prefix",
                self.format_id(),
                TAG_SEPARATOR
            ))
        })?;

        let expected = self.format_id();
        if tag != expected {
            return Err(CodecError::FormatMismatch {
                expected,
                found: tag.to_string(),
            });
        }
        Ok(body)
    }
}

impl<S, C, E> std::fmt::Debug for CompressionPipeline<S, C, E>
where
    S: SpectrumCodec,
    C: ByteCompressor,
    E: TextEncoder,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompressionPipeline")
            .field("format_id", &self.format_id())
            .field("tagged", &self.tagged)
            .finish()
    }
}
