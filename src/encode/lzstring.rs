use crate::error::{CodecError, Result};

use super::TextEncoder;

/// Widen bytes to UTF-16 code units one to one
fn widen(data: &[u8]) -> Vec<u16> {
    data.iter().map(|&b| u16::from(b)).collect()
}

/// Invert [`widen`]; code units above `0xff` were never produced by it
fn narrow(units: Vec<u16>) -> Result<Vec<u8>> {
    units
        .into_iter()
        .map(|unit| {
            u8::try_from(unit).map_err(|_| {
                CodecError::decode(format!("LZ-string output unit {:#06x} is not a byte", unit))
            })
        })
        .collect()
}

fn decompressed(units: Option<Vec<u16>>, form: &str) -> Result<Vec<u8>> {
    match units {
        Some(units) => narrow(units),
        None => Err(CodecError::decode(format!(
            "invalid LZ-string {} text",
            form
        ))),
    }
}

/// LZ-string compression emitted in its base64 form.
///
/// Each input byte is one UTF-16 code unit, so ASCII payloads produce the
/// same text as `LZString.compressToBase64` in JavaScript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LzString;

impl TextEncoder for LzString {
    fn encode(&self, data: &[u8]) -> Result<String> {
        if data.is_empty() {
            return Ok(String::new());
        }
        Ok(lz_str::compress_to_base64(&widen(data)))
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        decompressed(lz_str::decompress_from_base64(text), "base64")
    }

    fn name(&self) -> String {
        "lz-string".to_string()
    }
}

/// LZ-string compression emitted in its URI-component form.
///
/// Output uses `A-Z a-z 0-9 + - $` and needs no escaping in a query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LzStringUri;

impl TextEncoder for LzStringUri {
    fn encode(&self, data: &[u8]) -> Result<String> {
        if data.is_empty() {
            return Ok(String::new());
        }
        Ok(lz_str::compress_to_encoded_uri_component(&widen(data)))
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        decompressed(
            lz_str::decompress_from_encoded_uri_component(text),
            "URI component",
        )
    }

    fn name(&self) -> String {
        "lz-string-uri".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_alphabet() {
        let data: Vec<u8> = (0..=255u8).collect();
        let encoded = LzStringUri.encode(&data).unwrap();
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '$'));
    }

    #[test]
    fn test_repetitive_text_shrinks() {
        let data = "42c80000".repeat(64);
        let encoded = LzStringUri.encode(data.as_bytes()).unwrap();
        assert!(encoded.len() < data.len());
        assert_eq!(LzStringUri.decode(&encoded).unwrap(), data.as_bytes());
    }

    #[test]
    fn test_narrow_rejects_wide_units() {
        assert!(narrow(vec![0x41, 0x263a]).is_err());
    }
}
