//! # Spectrum Codecs
//!
//! A spectrum codec turns one `(mz, intensity)` pair into a framed text
//! payload and back. Every variant delta-codes the m/z array and differs in
//! how it treats intensities:
//!
//! | Variant | Intensities | Exact |
//! |---------|-------------|-------|
//! | [`F32Codec`] | raw hex bit patterns | yes |
//! | [`SortedDeltaCodec`] | sorted, delta-coded, plus permutation | yes |
//! | [`F32LossyCodec`] | log-domain quantized | m/z only |
//! | [`FixedPointCodec`] | log-domain quantized, m/z rounded to fixed decimals | no |
//!
//! Empty arrays are written as an empty component and decode to empty
//! vectors; the delta codec never sees zero elements.

mod framing;
mod kind;
mod lossless;
mod lossy;
mod types;


use log::warn;

pub use kind::SpectrumCodecKind;
pub use lossless::{F32Codec, SortedDeltaCodec};
pub use lossy::{F32LossyCodec, FixedPointCodec};
pub use types::SpectrumArrays;

use crate::codec::{delta, HexScalar};
use crate::error::Result;

/// Encodes a spectrum into a framed text payload and back
pub trait SpectrumCodec: Send + Sync {
    /// Encode paired m/z and intensity arrays
    fn encode(&self, mz: &[f32], intensity: &[f32]) -> Result<String>;

    /// Decode a payload produced by [`SpectrumCodec::encode`]
    fn decode(&self, payload: &str) -> Result<(Vec<f32>, Vec<f32>)>;

    /// Short stable name used in pipeline format identifiers
    fn name(&self) -> String;

    /// Whether decode reproduces the input bit for bit
    fn is_lossless(&self) -> bool {
        true
    }
}

impl<T: SpectrumCodec + ?Sized> SpectrumCodec for Box<T> {
    fn encode(&self, mz: &[f32], intensity: &[f32]) -> Result<String> {
        (**self).encode(mz, intensity)
    }

    fn decode(&self, payload: &str) -> Result<(Vec<f32>, Vec<f32>)> {
        (**self).decode(payload)
    }

    fn name(&self) -> String {
        (**self).name()
    }

    fn is_lossless(&self) -> bool {
        (**self).is_lossless()
    }
}

/// Delta-code an array, mapping the empty array to the empty marker
pub(crate) fn encode_delta_field<T: HexScalar>(values: &[T]) -> Result<String> {
    if values.is_empty() {
        return Ok(String::new());
    }
    delta::encode(values)
}

/// Inverse of [`encode_delta_field`]
pub(crate) fn decode_delta_field<T: HexScalar>(field: &str) -> Result<Vec<T>> {
    if field.is_empty() {
        return Ok(Vec::new());
    }
    delta::decode(field)
}

/// Delta-code the m/z array, noting when its order costs compression
pub(crate) fn encode_mz_field<T: HexScalar + PartialOrd>(mz: &[T]) -> Result<String> {
    if !mz.windows(2).all(|w| w[0] <= w[1]) {
        warn!(
            "m/z array of {} values is not sorted; delta fields will be wide",
            mz.len()
        );
    }
    encode_delta_field(mz)
}
