//! # mzToken - Compact Text Tokens for Mass Spectra
//!
//! `mztoken` encodes mass spectrometry spectra (paired m/z and intensity
//! arrays) into short text tokens suitable for URLs, storage keys or wire
//! transfer, and decodes them back exactly or within a declared lossy
//! tolerance.
//!
//! ## Key Features
//!
//! - **Bit-Pattern Delta Coding**: Sorted m/z arrays are stored as wrapping
//!   differences of their IEEE-754 bit patterns, with leading zero nibbles
//!   elided and their counts packed into a trailer.
//!
//! - **Exact by Default**: The lossless codecs reproduce every `f32` bit for
//!   bit, including NaN payloads and signed zeros.
//!
//! - **Log-Domain Quantization**: Lossy variants keep intensities to a chosen
//!   number of bits on a logarithmic scale, bounding relative error.
//!
//! - **Composable Pipeline**: Spectrum codec, byte compressor and text encoder
//!   are independent stages; any combination forms a valid token format.
//!
//! ## Quick Start
//!
//! ```rust
//! use mztoken::prelude::*;
//!
//! let pipeline = PipelineConfig::url().build()?;
//!
//! let mz = [100.0, 100.0, 200.0, 300.0, 300.0];
//! let intensity = [50.0, 20.0, 30.0, 20.0, 50.0];
//! let token = pipeline.compress(&mz, &intensity)?;
//!
//! let (decoded_mz, decoded_intensity) = pipeline.decompress(&token)?;
//! assert_eq!(decoded_mz, mz);
//! assert_eq!(decoded_intensity, intensity);
//! # Ok::<(), CodecError>(())
//! ```
//!
//! ## Building Pipelines
//!
//! ```rust
//! use mztoken::prelude::*;
//!
//! let config = PipelineConfig {
//!     spectrum: SpectrumCodecKind::F32Lossy { bits: 10 },
//!     compressor: CompressorKind::Zstd { level: 19 },
//!     encoder: EncoderKind::Base85,
//!     tagged: true,
//! };
//! let pipeline = config.build()?;
//! assert_eq!(pipeline.format_id(), "f32-lossy10_zstd_base85");
//! # Ok::<(), CodecError>(())
//! ```
//!
//! ## Modules
//!
//! - [`codec`]: hex scalar, index, delta and quantizer primitives
//! - [`spectrum`]: spectrum codecs and payload framing
//! - [`compress`]: byte compressors
//! - [`encode`]: text encoders
//! - [`pipeline`]: stage composition and configuration
//! - [`error`]: the shared error type

#![deny(missing_docs)]

pub mod codec;
pub mod compress;
pub mod encode;
pub mod error;
pub mod pipeline;
pub mod spectrum;

pub use error::{CodecError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::compress::{ByteCompressor, CompressorKind};
    pub use crate::encode::{EncoderKind, TextEncoder};
    pub use crate::error::{CodecError, Result};
    pub use crate::pipeline::{CompressionPipeline, PipelineConfig};
    pub use crate::spectrum::{SpectrumArrays, SpectrumCodec, SpectrumCodecKind};
}
