//! Fixed-width hexadecimal bit patterns for 32-bit scalars
//!
//! A scalar is reinterpreted as its raw 32-bit pattern (IEEE-754 for `f32`,
//! two's complement for `i32`) and written as exactly eight lowercase hex
//! digits, most significant nibble first. No value ever passes through a
//! decimal representation, so encoding is bit-exact for every input,
//! including NaN payloads and negative zero.

use crate::error::{CodecError, Result};

/// Byte width of every scalar carried by the codecs
pub const SCALAR_WIDTH: usize = 4;

/// Hex digits in one full scalar field
pub const FIELD_DIGITS: usize = SCALAR_WIDTH * 2;

/// A 32-bit scalar that can be carried as a raw bit pattern
pub trait HexScalar: Copy {
    /// Reinterpret the value as its 32-bit pattern
    fn bit_pattern(self) -> u32;

    /// Rebuild a value from its 32-bit pattern
    fn from_bit_pattern(bits: u32) -> Self;
}

impl HexScalar for f32 {
    #[inline]
    fn bit_pattern(self) -> u32 {
        self.to_bits()
    }

    #[inline]
    fn from_bit_pattern(bits: u32) -> Self {
        f32::from_bits(bits)
    }
}

impl HexScalar for i32 {
    #[inline]
    fn bit_pattern(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_bit_pattern(bits: u32) -> Self {
        bits as i32
    }
}

/// Format a bit pattern as a zero-padded field of `FIELD_DIGITS` digits
#[inline]
pub fn format_bits(bits: u32) -> String {
    format!("{:08x}", bits)
}

/// Encode one scalar as a fixed-width hex field
pub fn encode_scalar<T: HexScalar>(value: T) -> String {
    format_bits(value.bit_pattern())
}

/// Decode one fixed-width hex field back to a scalar
pub fn decode_scalar<T: HexScalar>(field: &str) -> Result<T> {
    if field.len() != FIELD_DIGITS {
        return Err(CodecError::decode(format!(
            "scalar field must be {} hex digits, got {}",
            FIELD_DIGITS,
            field.len()
        )));
    }
    parse_hex(field).map(T::from_bit_pattern)
}

/// Concatenate the fixed-width fields of every value
pub fn encode_array<T: HexScalar>(values: &[T]) -> String {
    let mut out = String::with_capacity(values.len() * FIELD_DIGITS);
    for &value in values {
        out.push_str(&encode_scalar(value));
    }
    out
}

/// Split a concatenation of fixed-width fields back into scalars
pub fn decode_array<T: HexScalar>(s: &str) -> Result<Vec<T>> {
    if s.len() % FIELD_DIGITS != 0 {
        return Err(CodecError::malformed(format!(
            "hex array length {} is not a multiple of {}",
            s.len(),
            FIELD_DIGITS
        )));
    }

    let mut values = Vec::with_capacity(s.len() / FIELD_DIGITS);
    for chunk in s.as_bytes().chunks(FIELD_DIGITS) {
        let field = std::str::from_utf8(chunk)
            .map_err(|_| CodecError::decode("hex array contains non-ASCII bytes"))?;
        values.push(decode_scalar(field)?);
    }
    Ok(values)
}

/// Parse between one and eight hex digits into an unsigned value.
///
/// Unlike `u32::from_str_radix` this rejects sign prefixes, so a stray `+`
/// in a corrupted token is reported instead of silently accepted.
pub(crate) fn parse_hex(digits: &str) -> Result<u32> {
    if digits.is_empty() || digits.len() > FIELD_DIGITS {
        return Err(CodecError::decode(format!(
            "hex field must have 1..={} digits, got {}",
            FIELD_DIGITS,
            digits.len()
        )));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::decode(format!("invalid hex digits: {:?}", digits)));
    }
    u32::from_str_radix(digits, 16)
        .map_err(|e| CodecError::decode(format!("invalid hex field {:?}: {}", digits, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_floats() {
        // 100.0 = 0x42C80000, 200.0 = 0x43480000 (big-endian nibble order)
        assert_eq!(encode_scalar(100.0f32), "42c80000");
        assert_eq!(encode_scalar(200.0f32), "43480000");
        assert_eq!(encode_scalar(0.0f32), "00000000");
        assert_eq!(encode_scalar(-0.0f32), "80000000");
    }

    #[test]
    fn test_encode_known_ints() {
        assert_eq!(encode_scalar(-1i32), "ffffffff");
        assert_eq!(encode_scalar(10_000i32), "00002710");
        assert_eq!(decode_scalar::<i32>("ffffffff").unwrap(), -1);
    }

    #[test]
    fn test_decode_is_bit_exact() {
        for value in [f32::MIN_POSITIVE, f32::MAX, -123.456, 1.0e-40, f32::INFINITY] {
            let decoded: f32 = decode_scalar(&encode_scalar(value)).unwrap();
            assert_eq!(decoded.to_bits(), value.to_bits());
        }

        let nan = f32::from_bits(0x7fc0_0001);
        let decoded: f32 = decode_scalar(&encode_scalar(nan)).unwrap();
        assert_eq!(decoded.to_bits(), 0x7fc0_0001);
    }

    #[test]
    fn test_decode_accepts_uppercase() {
        let value: f32 = decode_scalar("42C80000").unwrap();
        assert_eq!(value, 100.0);
    }

    #[test]
    fn test_decode_rejects_bad_fields() {
        assert!(matches!(
            decode_scalar::<f32>("42c8000"),
            Err(CodecError::Decode(_))
        ));
        assert!(matches!(
            decode_scalar::<f32>("42c8000g"),
            Err(CodecError::Decode(_))
        ));
        assert!(matches!(
            decode_scalar::<f32>("+2c80000"),
            Err(CodecError::Decode(_))
        ));
    }

    #[test]
    fn test_array_roundtrip() {
        let values = [50.0f32, 20.0, 30.0, 20.0, 50.0];
        let encoded = encode_array(&values);
        assert_eq!(encoded.len(), values.len() * FIELD_DIGITS);
        assert_eq!(decode_array::<f32>(&encoded).unwrap(), values);
        assert!(decode_array::<f32>("").unwrap().is_empty());
    }

    #[test]
    fn test_array_rejects_partial_stride() {
        assert!(matches!(
            decode_array::<f32>("42c80000428"),
            Err(CodecError::MalformedToken(_))
        ));
    }
}
