use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;

use crate::error::{CodecError, Result};

use super::TextEncoder;

/// URL-safe base64 with `=` padding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlSafeBase64;

impl TextEncoder for UrlSafeBase64 {
    fn encode(&self, data: &[u8]) -> Result<String> {
        Ok(URL_SAFE.encode(data))
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        URL_SAFE
            .decode(text.trim())
            .map_err(|e| CodecError::decode(format!("Base64 decode error: {}", e)))
    }

    fn name(&self) -> String {
        "url-safe-base64".to_string()
    }
}
