use std::io::{Read, Write};

use ::brotli::{CompressorWriter, Decompressor};

use crate::error::{CodecError, Result};

use super::{corrupt, ByteCompressor};

const BUFFER_SIZE: usize = 4096;
const LG_WINDOW: u32 = 22;

/// Brotli compressor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrotliCompressor {
    quality: u32,
}

impl Default for BrotliCompressor {
    fn default() -> Self {
        Self {
            quality: Self::default_quality(),
        }
    }
}

impl BrotliCompressor {
    /// Quality 11, the Brotli reference default
    pub fn default_quality() -> u32 {
        11
    }

    /// Create a compressor at `quality` (0-11)
    pub fn new(quality: u32) -> Result<Self> {
        if quality > 11 {
            return Err(CodecError::range(format!(
                "brotli quality must be 0..=11, got {}",
                quality
            )));
        }
        Ok(Self { quality })
    }
}

impl ByteCompressor for BrotliCompressor {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut writer = CompressorWriter::new(Vec::new(), BUFFER_SIZE, self.quality, LG_WINDOW);
        writer.write_all(data)?;
        writer.flush()?;
        Ok(writer.into_inner())
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut decoder = Decompressor::new(data, BUFFER_SIZE);
        let mut out = Vec::new();
        decoder
            .read_to_end(&mut out)
            .map_err(|e| corrupt("brotli", e))?;
        Ok(out)
    }

    fn name(&self) -> String {
        "brotli".to_string()
    }
}
