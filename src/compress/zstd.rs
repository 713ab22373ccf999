use crate::error::{CodecError, Result};

use super::{corrupt, ByteCompressor};

/// Zstandard compressor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZstdCompressor {
    level: i32,
}

impl Default for ZstdCompressor {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl ZstdCompressor {
    /// Level 3, the zstd library default
    pub fn default_level() -> i32 {
        3
    }

    /// Create a compressor at `level` (1-22)
    pub fn new(level: i32) -> Result<Self> {
        if !(1..=22).contains(&level) {
            return Err(CodecError::range(format!(
                "zstd level must be 1..=22, got {}",
                level
            )));
        }
        Ok(Self { level })
    }
}

impl ByteCompressor for ZstdCompressor {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(::zstd::stream::encode_all(data, self.level)?)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        ::zstd::stream::decode_all(data).map_err(|e| corrupt("zstd", e))
    }

    fn name(&self) -> String {
        "zstd".to_string()
    }
}
