//! Log-scale lossy quantization of positive values
//!
//! Values are mapped through `ln`, then linearly between the minimum and
//! maximum log onto integer codes in `[0, 2^bits - 1]`. The two bounds are
//! stored at full `f32` precision ahead of the codes:
//!
//! ```text
//! [lo: 8 hex][hi: 8 hex][code 0][code 1]...   (each code ceil(bits/4) hex digits)
//! ```
//!
//! This is the only lossy path in the crate. A decoded value lies within
//! half a log-domain step, `(hi - lo) / (2^bits - 1) / 2`, of the original;
//! round trips are never exact.

use log::trace;

use crate::codec::hex::{decode_scalar, encode_scalar, parse_hex, FIELD_DIGITS};
use crate::error::{CodecError, Result};

/// Quantized form of a positive sequence
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizedValues {
    /// Smallest log value, used as the bottom of the code range
    pub min: f32,
    /// Largest log value, used as the top of the code range
    pub max: f32,
    /// One code per input value
    pub codes: Vec<u32>,
}

/// Log-domain quantizer with a fixed code width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LossyQuantizer {
    bits: u32,
}

impl Default for LossyQuantizer {
    fn default() -> Self {
        Self {
            bits: Self::DEFAULT_BITS,
        }
    }
}

impl LossyQuantizer {
    /// Code width used when none is configured
    pub const DEFAULT_BITS: u32 = 8;

    /// Widest supported code
    pub const MAX_BITS: u32 = 16;

    /// Create a quantizer producing `bits`-wide codes (1..=16)
    pub fn new(bits: u32) -> Result<Self> {
        if bits == 0 || bits > Self::MAX_BITS {
            return Err(CodecError::range(format!(
                "quantizer bit width must be 1..={}, got {}",
                Self::MAX_BITS,
                bits
            )));
        }
        Ok(Self { bits })
    }

    /// Code width in bits
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Largest code value
    pub fn max_code(&self) -> u32 {
        (1u32 << self.bits) - 1
    }

    /// Hex digits per code
    pub fn code_digits(&self) -> usize {
        self.bits.div_ceil(4) as usize
    }

    /// Log-domain width of one quantization step for the given bounds
    pub fn step(&self, min: f32, max: f32) -> f64 {
        (max as f64 - min as f64) / self.max_code() as f64
    }

    /// Quantize a non-empty sequence of positive, finite values
    pub fn quantize(&self, values: &[f32]) -> Result<QuantizedValues> {
        if values.is_empty() {
            return Err(CodecError::range("quantizer requires at least one value"));
        }

        let logs = values
            .iter()
            .map(|&v| {
                if v > 0.0 && v.is_finite() {
                    Ok((v as f64).ln())
                } else {
                    Err(CodecError::range(format!(
                        "quantizer requires positive finite values, got {}",
                        v
                    )))
                }
            })
            .collect::<Result<Vec<f64>>>()?;

        let min = logs.iter().copied().fold(f64::INFINITY, f64::min) as f32;
        let max = logs.iter().copied().fold(f64::NEG_INFINITY, f64::max) as f32;

        // Codes are computed against the stored f32 bounds so the decoder
        // sees exactly the same range.
        let lo = min as f64;
        let span = max as f64 - lo;
        let max_code = self.max_code() as f64;

        let codes = if span > 0.0 {
            logs.iter()
                .map(|&l| ((l - lo) / span * max_code).round().clamp(0.0, max_code) as u32)
                .collect()
        } else {
            vec![0; logs.len()]
        };

        Ok(QuantizedValues { min, max, codes })
    }

    /// Map quantized codes back to values
    pub fn dequantize(&self, quantized: &QuantizedValues) -> Result<Vec<f32>> {
        let lo = quantized.min as f64;
        let span = quantized.max as f64 - lo;
        let max_code = self.max_code();

        quantized
            .codes
            .iter()
            .map(|&code| {
                if code > max_code {
                    return Err(CodecError::decode(format!(
                        "code {} exceeds {}-bit range",
                        code, self.bits
                    )));
                }
                Ok((lo + code as f64 / max_code as f64 * span).exp() as f32)
            })
            .collect()
    }

    /// Quantize and serialize to hex
    pub fn encode(&self, values: &[f32]) -> Result<String> {
        let quantized = self.quantize(values)?;
        let digits = self.code_digits();

        let mut out = String::with_capacity(2 * FIELD_DIGITS + quantized.codes.len() * digits);
        out.push_str(&encode_scalar(quantized.min));
        out.push_str(&encode_scalar(quantized.max));
        for code in &quantized.codes {
            out.push_str(&format!("{:0width$x}", code, width = digits));
        }

        trace!(
            "quantized {} values at {} bits, log range [{}, {}]",
            values.len(),
            self.bits,
            quantized.min,
            quantized.max
        );
        Ok(out)
    }

    /// Parse the hex form produced by [`LossyQuantizer::encode`]
    pub fn parse(&self, s: &str) -> Result<QuantizedValues> {
        if !s.is_ascii() {
            return Err(CodecError::decode("quantized string contains non-ASCII bytes"));
        }
        if s.len() < 2 * FIELD_DIGITS {
            return Err(CodecError::malformed(format!(
                "quantized string needs {} bound digits, got {}",
                2 * FIELD_DIGITS,
                s.len()
            )));
        }

        let (bounds, body) = s.split_at(2 * FIELD_DIGITS);
        let min: f32 = decode_scalar(&bounds[..FIELD_DIGITS])?;
        let max: f32 = decode_scalar(&bounds[FIELD_DIGITS..])?;
        if !(min.is_finite() && max.is_finite()) || min > max {
            return Err(CodecError::decode(format!(
                "invalid quantizer bounds [{}, {}]",
                min, max
            )));
        }

        let digits = self.code_digits();
        if body.len() % digits != 0 {
            return Err(CodecError::malformed(format!(
                "code string length {} is not a multiple of {}",
                body.len(),
                digits
            )));
        }

        let codes = body
            .as_bytes()
            .chunks(digits)
            .map(|chunk| {
                // ASCII was checked above
                let token = std::str::from_utf8(chunk)
                    .map_err(|_| CodecError::decode("quantized string contains non-ASCII bytes"))?;
                parse_hex(token)
            })
            .collect::<Result<Vec<u32>>>()?;

        Ok(QuantizedValues { min, max, codes })
    }

    /// Parse and dequantize
    pub fn decode(&self, s: &str) -> Result<Vec<f32>> {
        let quantized = self.parse(s)?;
        self.dequantize(&quantized)
    }
}
