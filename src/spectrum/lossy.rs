use crate::codec::LossyQuantizer;
use crate::error::{CodecError, Result};

use super::framing;
use super::{decode_delta_field, encode_mz_field, SpectrumCodec};

fn encode_quantized(quantizer: &LossyQuantizer, intensity: &[f32]) -> Result<String> {
    if intensity.is_empty() {
        return Ok(String::new());
    }
    quantizer.encode(intensity)
}

fn decode_quantized(quantizer: &LossyQuantizer, field: &str) -> Result<Vec<f32>> {
    if field.is_empty() {
        return Ok(Vec::new());
    }
    quantizer.decode(field)
}

/// Exact m/z, log-quantized intensities.
///
/// Payload: `[mz_delta, quantized_intensity]`. Intensities must be positive;
/// each decodes to within half a log-domain step of its original.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct F32LossyCodec {
    quantizer: LossyQuantizer,
}

impl F32LossyCodec {
    /// Create a codec quantizing intensities to `bits`-wide codes
    pub fn new(bits: u32) -> Result<Self> {
        Ok(Self {
            quantizer: LossyQuantizer::new(bits)?,
        })
    }

    /// The intensity quantizer
    pub fn quantizer(&self) -> &LossyQuantizer {
        &self.quantizer
    }
}

impl SpectrumCodec for F32LossyCodec {
    fn encode(&self, mz: &[f32], intensity: &[f32]) -> Result<String> {
        let mz_field = encode_mz_field(mz)?;
        let intensity_field = encode_quantized(&self.quantizer, intensity)?;
        framing::join(&[mz_field.as_str(), intensity_field.as_str()])
    }

    fn decode(&self, payload: &str) -> Result<(Vec<f32>, Vec<f32>)> {
        let [mz_field, intensity_field] = framing::split::<2>(payload)?;
        let mz = decode_delta_field(&mz_field)?;
        let intensity = decode_quantized(&self.quantizer, &intensity_field)?;
        Ok((mz, intensity))
    }

    fn name(&self) -> String {
        format!("f32-lossy{}", self.quantizer.bits())
    }

    fn is_lossless(&self) -> bool {
        false
    }
}

/// Fixed-decimal m/z, log-quantized intensities.
///
/// m/z values are rounded to `mz_precision` decimal places and delta-coded
/// as scaled `i32` integers; intensities are quantized as in
/// [`F32LossyCodec`]. Payload: `[mz_int_delta, quantized_intensity]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPointCodec {
    mz_precision: u32,
    quantizer: LossyQuantizer,
}

impl Default for FixedPointCodec {
    fn default() -> Self {
        Self {
            mz_precision: Self::DEFAULT_MZ_PRECISION,
            quantizer: LossyQuantizer::default(),
        }
    }
}

impl FixedPointCodec {
    /// m/z decimals kept when none are configured
    pub const DEFAULT_MZ_PRECISION: u32 = 2;

    /// Most m/z decimals an `i32` scale factor allows
    pub const MAX_MZ_PRECISION: u32 = 9;

    /// Create a codec keeping `mz_precision` m/z decimals and `bits`-wide intensity codes
    pub fn new(mz_precision: u32, bits: u32) -> Result<Self> {
        if mz_precision > Self::MAX_MZ_PRECISION {
            return Err(CodecError::range(format!(
                "m/z precision must be 0..={}, got {}",
                Self::MAX_MZ_PRECISION,
                mz_precision
            )));
        }
        Ok(Self {
            mz_precision,
            quantizer: LossyQuantizer::new(bits)?,
        })
    }

    /// Decimal places kept for m/z
    pub fn mz_precision(&self) -> u32 {
        self.mz_precision
    }

    /// The intensity quantizer
    pub fn quantizer(&self) -> &LossyQuantizer {
        &self.quantizer
    }

    fn scale(&self) -> f64 {
        10f64.powi(self.mz_precision as i32)
    }

    fn to_fixed(&self, mz: &[f32]) -> Result<Vec<i32>> {
        let scale = self.scale();
        mz.iter()
            .map(|&v| {
                let scaled = (v as f64 * scale).round();
                if scaled.is_finite() && scaled >= i32::MIN as f64 && scaled <= i32::MAX as f64 {
                    Ok(scaled as i32)
                } else {
                    Err(CodecError::range(format!(
                        "m/z {} does not fit i32 at {} decimals",
                        v, self.mz_precision
                    )))
                }
            })
            .collect()
    }
}

impl SpectrumCodec for FixedPointCodec {
    fn encode(&self, mz: &[f32], intensity: &[f32]) -> Result<String> {
        let fixed = self.to_fixed(mz)?;
        let mz_field = encode_mz_field(&fixed)?;
        let intensity_field = encode_quantized(&self.quantizer, intensity)?;
        framing::join(&[mz_field.as_str(), intensity_field.as_str()])
    }

    fn decode(&self, payload: &str) -> Result<(Vec<f32>, Vec<f32>)> {
        let [mz_field, intensity_field] = framing::split::<2>(payload)?;
        let scale = self.scale();
        let mz = decode_delta_field::<i32>(&mz_field)?
            .into_iter()
            .map(|v| (v as f64 / scale) as f32)
            .collect();
        let intensity = decode_quantized(&self.quantizer, &intensity_field)?;
        Ok((mz, intensity))
    }

    fn name(&self) -> String {
        format!("fixed-point{}-{}", self.mz_precision, self.quantizer.bits())
    }

    fn is_lossless(&self) -> bool {
        false
    }
}
