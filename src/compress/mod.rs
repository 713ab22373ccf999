//! # Byte Compressors
//!
//! The middle pipeline stage: a general-purpose compressor applied to the
//! UTF-8 bytes of a spectrum payload.
//!
//! | Kind | Crate | Notes |
//! |------|-------|-------|
//! | [`Passthrough`] | | identity, for text codecs that compress themselves |
//! | [`GzipCompressor`] | `flate2` | gzip container, level 0-9 |
//! | [`BrotliCompressor`] | `brotli` | quality 0-11, best ratio on short hex text |
//! | [`ZstdCompressor`] | `zstd` | level 1-22 |
//!
//! Every `decompress` reports corrupt input as [`CodecError::Decode`].

mod brotli;
mod gzip;
mod passthrough;
mod zstd;

use serde::{Deserialize, Serialize};

pub use self::brotli::BrotliCompressor;
pub use self::gzip::GzipCompressor;
pub use self::passthrough::Passthrough;
pub use self::zstd::ZstdCompressor;

use crate::error::{CodecError, Result};

/// A reversible transform over arbitrary byte strings
pub trait ByteCompressor: Send + Sync {
    /// Compress `data`
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Invert [`ByteCompressor::compress`]
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Short stable name used in pipeline format identifiers
    fn name(&self) -> String;
}

impl<T: ByteCompressor + ?Sized> ByteCompressor for Box<T> {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        (**self).compress(data)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        (**self).decompress(data)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

/// Byte compressor selection, as written in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CompressorKind {
    /// No compression
    None,
    /// gzip via flate2
    Gzip {
        /// Compression level (0-9)
        #[serde(default = "GzipCompressor::default_level")]
        level: u32,
    },
    /// Brotli
    Brotli {
        /// Compression quality (0-11)
        #[serde(default = "BrotliCompressor::default_quality")]
        quality: u32,
    },
    /// Zstandard
    Zstd {
        /// Compression level (1-22)
        #[serde(default = "ZstdCompressor::default_level")]
        level: i32,
    },
}

impl Default for CompressorKind {
    fn default() -> Self {
        Self::Brotli {
            quality: BrotliCompressor::default_quality(),
        }
    }
}

impl CompressorKind {
    /// Every kind with default parameters
    pub fn all() -> [Self; 4] {
        [
            Self::None,
            Self::Gzip {
                level: GzipCompressor::default_level(),
            },
            Self::Brotli {
                quality: BrotliCompressor::default_quality(),
            },
            Self::Zstd {
                level: ZstdCompressor::default_level(),
            },
        ]
    }

    /// Instantiate the compressor, validating its parameters
    pub fn build(&self) -> Result<Box<dyn ByteCompressor>> {
        Ok(match *self {
            Self::None => Box::new(Passthrough),
            Self::Gzip { level } => Box::new(GzipCompressor::new(level)?),
            Self::Brotli { quality } => Box::new(BrotliCompressor::new(quality)?),
            Self::Zstd { level } => Box::new(ZstdCompressor::new(level)?),
        })
    }
}

/// Map a stream error from a decompressor to a decode failure
pub(crate) fn corrupt(codec: &str, error: std::io::Error) -> CodecError {
    CodecError::decode(format!("{} stream is corrupt: {}", codec, error))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &[u8] = br#"["42c800008000004e000082280","4248000041a0000041f0000041a0000042480000"]"#;

    #[test]
    fn test_every_compressor_roundtrips() {
        for kind in CompressorKind::all() {
            let compressor = kind.build().unwrap();
            let compressed = compressor.compress(PAYLOAD).unwrap();
            assert_eq!(
                compressor.decompress(&compressed).unwrap(),
                PAYLOAD,
                "{}",
                compressor.name()
            );
        }
    }

    #[test]
    fn test_empty_input_roundtrips() {
        for kind in CompressorKind::all() {
            let compressor = kind.build().unwrap();
            let compressed = compressor.compress(b"").unwrap();
            assert!(compressor.decompress(&compressed).unwrap().is_empty());
        }
    }

    #[test]
    fn test_corrupt_input_is_decode_error() {
        let garbage = b"definitely not a compressed stream";
        for kind in [CompressorKind::Gzip { level: 9 }, CompressorKind::Zstd { level: 3 }] {
            let compressor = kind.build().unwrap();
            assert!(
                matches!(compressor.decompress(garbage), Err(CodecError::Decode(_))),
                "{}",
                compressor.name()
            );
        }

        // Brotli has no magic number, so only require that failures are typed
        let brotli = BrotliCompressor::default();
        let compressed = brotli.compress(PAYLOAD).unwrap();
        let truncated = &compressed[..compressed.len() / 2];
        match brotli.decompress(truncated) {
            Ok(out) => assert_ne!(out, PAYLOAD),
            Err(e) => assert!(matches!(e, CodecError::Decode(_))),
        }
    }

    #[test]
    fn test_names() {
        let names: Vec<String> = CompressorKind::all()
            .iter()
            .map(|kind| kind.build().unwrap().name())
            .collect();
        assert_eq!(names, vec!["none", "gzip", "brotli", "zstd"]);
    }

    #[test]
    fn test_parse_kind() {
        #[derive(Deserialize)]
        struct Wrapper {
            compressor: CompressorKind,
        }
        let parsed: Wrapper = toml::from_str(r#"compressor = { kind = "gzip" }"#).unwrap();
        assert_eq!(parsed.compressor, CompressorKind::Gzip { level: 9 });
    }

    #[test]
    fn test_level_validation() {
        assert!(CompressorKind::Gzip { level: 10 }.build().is_err());
        assert!(CompressorKind::Brotli { quality: 12 }.build().is_err());
        assert!(CompressorKind::Zstd { level: 0 }.build().is_err());
    }
}
