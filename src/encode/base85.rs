use crate::error::{CodecError, Result};

use super::TextEncoder;

/// RFC 1924 alphabet, in digit order
const ALPHABET: &[u8; 85] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~";

/// Marks bytes outside the alphabet in [`DIGITS`]
const INVALID: u8 = 0xff;

/// Reverse lookup from ASCII byte to digit value
const DIGITS: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Base85 with the RFC 1924 alphabet.
///
/// Every 4-byte big-endian word becomes 5 characters. A short final chunk is
/// zero-padded before encoding and the characters standing for the padding
/// are dropped, so the output carries no padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base85;

impl TextEncoder for Base85 {
    fn encode(&self, data: &[u8]) -> Result<String> {
        let mut out = String::with_capacity(data.len().div_ceil(4) * 5);
        for chunk in data.chunks(4) {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            let mut value = u32::from_be_bytes(word);

            let mut digits = [0u8; 5];
            for digit in digits.iter_mut().rev() {
                *digit = ALPHABET[(value % 85) as usize];
                value /= 85;
            }
            // a chunk of n bytes keeps n + 1 characters
            out.extend(digits[..chunk.len() + 1].iter().map(|&b| b as char));
        }
        Ok(out)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        let bytes = text.as_bytes();
        if bytes.len() % 5 == 1 {
            return Err(CodecError::decode(format!(
                "base85 text of length {} has a dangling character",
                bytes.len()
            )));
        }

        let mut out = Vec::with_capacity(bytes.len() / 5 * 4 + 4);
        for chunk in bytes.chunks(5) {
            let mut value: u64 = 0;
            for i in 0..5 {
                // short chunks are padded with the highest digit
                let digit = match chunk.get(i) {
                    Some(&b) => DIGITS[b as usize],
                    None => 84,
                };
                if digit == INVALID {
                    return Err(CodecError::decode(format!(
                        "invalid base85 character {:?}",
                        chunk[i] as char
                    )));
                }
                value = value * 85 + u64::from(digit);
            }
            let word = u32::try_from(value)
                .map_err(|_| CodecError::decode("base85 group overflows 32 bits"))?;
            out.extend_from_slice(&word.to_be_bytes()[..chunk.len() - 1]);
        }
        Ok(out)
    }

    fn name(&self) -> String {
        "base85".to_string()
    }
}
