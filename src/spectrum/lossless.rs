use crate::codec::{hex, index};
use crate::error::Result;

use super::framing;
use super::types::is_non_decreasing;
use super::{decode_delta_field, encode_delta_field, encode_mz_field, SpectrumCodec};

/// Lossless codec: delta-coded m/z, raw hex intensities.
///
/// Payload: `[mz_delta, intensity_hex]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct F32Codec;

impl SpectrumCodec for F32Codec {
    fn encode(&self, mz: &[f32], intensity: &[f32]) -> Result<String> {
        let mz_field = encode_mz_field(mz)?;
        let intensity_field = hex::encode_array(intensity);
        framing::join(&[mz_field.as_str(), intensity_field.as_str()])
    }

    fn decode(&self, payload: &str) -> Result<(Vec<f32>, Vec<f32>)> {
        let [mz_field, intensity_field] = framing::split::<2>(payload)?;
        let mz = decode_delta_field(&mz_field)?;
        let intensity = hex::decode_array(&intensity_field)?;
        Ok((mz, intensity))
    }

    fn name(&self) -> String {
        "f32".to_string()
    }
}

/// Lossless codec that sorts intensities before delta coding them.
///
/// Payload: `[mz_delta, sorted_intensity_delta, permutation]`. The
/// permutation component is empty when the intensities were already in
/// ascending order; otherwise it holds the 16-bit sort order, so this codec
/// handles at most 65 536 peaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortedDeltaCodec;

impl SpectrumCodec for SortedDeltaCodec {
    fn encode(&self, mz: &[f32], intensity: &[f32]) -> Result<String> {
        let mz_field = encode_mz_field(mz)?;

        let (intensity_field, permutation_field) = if is_non_decreasing(intensity) {
            (encode_delta_field(intensity)?, String::new())
        } else {
            let permutation = index::sort_permutation(intensity)?;
            let sorted = index::gather(intensity, &permutation);
            (
                encode_delta_field(&sorted)?,
                index::encode_indices(&permutation),
            )
        };

        framing::join(&[
            mz_field.as_str(),
            intensity_field.as_str(),
            permutation_field.as_str(),
        ])
    }

    fn decode(&self, payload: &str) -> Result<(Vec<f32>, Vec<f32>)> {
        let [mz_field, intensity_field, permutation_field] = framing::split::<3>(payload)?;
        let mz = decode_delta_field(&mz_field)?;
        let sorted: Vec<f32> = decode_delta_field(&intensity_field)?;

        let intensity = if permutation_field.is_empty() {
            sorted
        } else {
            let permutation = index::decode_indices(&permutation_field)?;
            index::scatter(&sorted, &permutation)?
        };
        Ok((mz, intensity))
    }

    fn name(&self) -> String {
        "sorted-delta".to_string()
    }
}
