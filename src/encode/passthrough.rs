use crate::error::{CodecError, Result};

use super::TextEncoder;

/// Identity encoder for payloads that are already text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassthroughText;

impl TextEncoder for PassthroughText {
    fn encode(&self, data: &[u8]) -> Result<String> {
        String::from_utf8(data.to_vec()).map_err(|_| {
            CodecError::range("pass-through text encoder requires UTF-8 input; pair it with no compression")
        })
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        Ok(text.as_bytes().to_vec())
    }

    fn name(&self) -> String {
        "passthrough".to_string()
    }
}
