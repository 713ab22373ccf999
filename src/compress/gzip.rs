use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{CodecError, Result};

use super::{corrupt, ByteCompressor};

/// gzip compressor backed by flate2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GzipCompressor {
    level: u32,
}

impl Default for GzipCompressor {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl GzipCompressor {
    /// Level 9, matching the usual `gzip` library default
    pub fn default_level() -> u32 {
        9
    }

    /// Create a compressor at `level` (0-9)
    pub fn new(level: u32) -> Result<Self> {
        if level > 9 {
            return Err(CodecError::range(format!(
                "gzip level must be 0..=9, got {}",
                level
            )));
        }
        Ok(Self { level })
    }
}

impl ByteCompressor for GzipCompressor {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::new(self.level));
        encoder.write_all(data)?;
        Ok(encoder.finish()?)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut decoder = GzDecoder::new(data);
        let mut out = Vec::new();
        decoder
            .read_to_end(&mut out)
            .map_err(|e| corrupt("gzip", e))?;
        Ok(out)
    }

    fn name(&self) -> String {
        "gzip".to_string()
    }
}
