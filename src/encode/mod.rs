//! # Text Encoders
//!
//! The last pipeline stage: turns compressed bytes into a string restricted
//! to a safe alphabet, suitable for URLs or storage keys.
//!
//! | Kind | Alphabet |
//! |------|----------|
//! | [`UrlSafeBase64`] | `A-Z a-z 0-9 - _` plus `=` padding |
//! | [`Base85`] | RFC 1924 (85 printable ASCII characters) |
//! | [`LzString`] | LZ-string base64 form, compresses as it encodes |
//! | [`LzStringUri`] | LZ-string URI-component form |
//! | [`PassthroughText`] | input must already be UTF-8 text |

mod base85;
mod lzstring;
mod passthrough;
mod url;

use serde::{Deserialize, Serialize};

pub use base85::Base85;
pub use lzstring::{LzString, LzStringUri};
pub use passthrough::PassthroughText;
pub use url::UrlSafeBase64;

use crate::error::Result;

/// A reversible bytes-to-text transform
pub trait TextEncoder: Send + Sync {
    /// Encode bytes as text in the encoder's alphabet
    fn encode(&self, data: &[u8]) -> Result<String>;

    /// Invert [`TextEncoder::encode`]
    fn decode(&self, text: &str) -> Result<Vec<u8>>;

    /// Short stable name used in pipeline format identifiers
    fn name(&self) -> String;
}

impl<T: TextEncoder + ?Sized> TextEncoder for Box<T> {
    fn encode(&self, data: &[u8]) -> Result<String> {
        (**self).encode(data)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        (**self).decode(text)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

/// Text encoder selection, as written in configuration files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EncoderKind {
    /// URL-safe base64
    #[default]
    UrlSafeBase64,
    /// RFC 1924 base85
    Base85,
    /// LZ-string, base64 output
    LzString,
    /// LZ-string, URI-component output
    LzStringUri,
    /// UTF-8 text passed through unchanged
    Passthrough,
}

impl EncoderKind {
    /// Every kind
    pub fn all() -> [Self; 5] {
        [
            Self::UrlSafeBase64,
            Self::Base85,
            Self::LzString,
            Self::LzStringUri,
            Self::Passthrough,
        ]
    }

    /// Instantiate the encoder
    pub fn build(&self) -> Box<dyn TextEncoder> {
        match self {
            Self::UrlSafeBase64 => Box::new(UrlSafeBase64),
            Self::Base85 => Box::new(Base85),
            Self::LzString => Box::new(LzString),
            Self::LzStringUri => Box::new(LzStringUri),
            Self::Passthrough => Box::new(PassthroughText),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    const TEXT: &[u8] = br#"["42c800008000004e000082280","4248000041a0000041f0000041a0000042480000"]"#;

    fn binary() -> Vec<u8> {
        (0..=255u8).rev().chain(0..=255u8).collect()
    }

    #[test]
    fn test_every_encoder_roundtrips_text() {
        for kind in EncoderKind::all() {
            let encoder = kind.build();
            let encoded = encoder.encode(TEXT).unwrap();
            assert_eq!(encoder.decode(&encoded).unwrap(), TEXT, "{}", encoder.name());
        }
    }

    #[test]
    fn test_binary_safe_encoders_roundtrip_all_bytes() {
        let data = binary();
        for kind in EncoderKind::all() {
            if kind == EncoderKind::Passthrough {
                continue;
            }
            let encoder = kind.build();
            let encoded = encoder.encode(&data).unwrap();
            assert!(encoded.is_ascii(), "{}", encoder.name());
            assert_eq!(encoder.decode(&encoded).unwrap(), data, "{}", encoder.name());
        }
    }

    #[test]
    fn test_empty_input_roundtrips() {
        for kind in EncoderKind::all() {
            let encoder = kind.build();
            let encoded = encoder.encode(b"").unwrap();
            assert!(encoder.decode(&encoded).unwrap().is_empty(), "{}", encoder.name());
        }
    }

    #[test]
    fn test_passthrough_rejects_binary() {
        assert!(matches!(
            PassthroughText.encode(&[0xff, 0xfe]),
            Err(CodecError::EncodingRange(_))
        ));
    }

    #[test]
    fn test_url_safe_alphabet() {
        let encoded = UrlSafeBase64.encode(&binary()).unwrap();
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '='));
    }

    #[test]
    fn test_invalid_text_is_decode_error() {
        for kind in [EncoderKind::UrlSafeBase64, EncoderKind::Base85] {
            let encoder = kind.build();
            assert!(
                matches!(encoder.decode("not valid \u{1F600}"), Err(CodecError::Decode(_))),
                "{}",
                encoder.name()
            );
        }
    }
}
