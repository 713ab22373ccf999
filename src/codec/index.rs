//! Permutation codec
//!
//! Encodes the ascending-sort order of an array as a run of 4-digit hex
//! indices, and scatters sorted values back to their original positions on
//! decode (`original[permutation[i]] = sorted[i]`).

use crate::codec::hex::parse_hex;
use crate::error::{CodecError, Result};

/// Hex digits per index
pub const INDEX_DIGITS: usize = 4;

/// Largest array a 16-bit permutation can address
pub const MAX_PERMUTATION_LEN: usize = u16::MAX as usize + 1;

/// Encode indices as fixed-width 4-digit hex tokens
pub fn encode_indices(indices: &[u16]) -> String {
    let mut out = String::with_capacity(indices.len() * INDEX_DIGITS);
    for index in indices {
        out.push_str(&format!("{:04x}", index));
    }
    out
}

/// Decode a run of 4-digit hex tokens
pub fn decode_indices(s: &str) -> Result<Vec<u16>> {
    if s.len() % INDEX_DIGITS != 0 {
        return Err(CodecError::malformed(format!(
            "index string length {} is not a multiple of {}",
            s.len(),
            INDEX_DIGITS
        )));
    }

    let mut indices = Vec::with_capacity(s.len() / INDEX_DIGITS);
    for chunk in s.as_bytes().chunks(INDEX_DIGITS) {
        let token = std::str::from_utf8(chunk)
            .map_err(|_| CodecError::decode("index string contains non-ASCII bytes"))?;
        // Four hex digits never exceed u16::MAX
        indices.push(parse_hex(token)? as u16);
    }
    Ok(indices)
}

/// Compute the stable ascending-sort permutation of `values`.
///
/// `values[perm[0]] <= values[perm[1]] <= ...` under IEEE total ordering.
pub fn sort_permutation(values: &[f32]) -> Result<Vec<u16>> {
    if values.len() > MAX_PERMUTATION_LEN {
        return Err(CodecError::range(format!(
            "cannot index {} values with 16-bit permutation (max {})",
            values.len(),
            MAX_PERMUTATION_LEN
        )));
    }

    let mut order: Vec<u16> = (0..values.len()).map(|i| i as u16).collect();
    order.sort_by(|&a, &b| values[a as usize].total_cmp(&values[b as usize]));
    Ok(order)
}

/// Apply a permutation: `out[i] = values[perm[i]]`
pub fn gather<T: Copy>(values: &[T], permutation: &[u16]) -> Vec<T> {
    permutation.iter().map(|&i| values[i as usize]).collect()
}

/// Restore original order: `out[perm[i]] = sorted[i]`.
///
/// The permutation must be a bijection over `[0, sorted.len())`.
pub fn scatter<T: Copy + Default>(sorted: &[T], permutation: &[u16]) -> Result<Vec<T>> {
    if permutation.len() != sorted.len() {
        return Err(CodecError::malformed(format!(
            "permutation length {} does not match {} values",
            permutation.len(),
            sorted.len()
        )));
    }

    let mut out = vec![T::default(); sorted.len()];
    let mut seen = vec![false; sorted.len()];
    for (&value, &target) in sorted.iter().zip(permutation) {
        let target = target as usize;
        if target >= sorted.len() {
            return Err(CodecError::malformed(format!(
                "permutation index {} out of range for {} values",
                target,
                sorted.len()
            )));
        }
        if std::mem::replace(&mut seen[target], true) {
            return Err(CodecError::malformed(format!(
                "permutation index {} appears twice",
                target
            )));
        }
        out[target] = value;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_fixed_width() {
        assert_eq!(encode_indices(&[1, 0, 255, 65535]), "0001000000ffffff");
        assert_eq!(encode_indices(&[]), "");
    }

    #[test]
    fn test_decode_indices() {
        assert_eq!(decode_indices("0001000000ffffff").unwrap(), vec![1, 0, 255, 65535]);
        assert!(decode_indices("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_partial_stride() {
        assert!(matches!(
            decode_indices("00010"),
            Err(CodecError::MalformedToken(_))
        ));
        assert!(matches!(decode_indices("zz01"), Err(CodecError::Decode(_))));
    }

    #[test]
    fn test_sort_permutation_is_stable() {
        let values = [50.0f32, 20.0, 30.0, 20.0, 50.0];
        let perm = sort_permutation(&values).unwrap();
        assert_eq!(perm, vec![1, 3, 2, 0, 4]);
        assert_eq!(gather(&values, &perm), vec![20.0, 20.0, 30.0, 50.0, 50.0]);
    }

    #[test]
    fn test_scatter_restores_order() {
        let values = [50.0f32, 20.0, 30.0, 20.0, 50.0];
        let perm = sort_permutation(&values).unwrap();
        let sorted = gather(&values, &perm);
        assert_eq!(scatter(&sorted, &perm).unwrap(), values);
    }

    #[test]
    fn test_scatter_rejects_non_bijection() {
        let sorted = [1.0f32, 2.0, 3.0];
        assert!(matches!(
            scatter(&sorted, &[0, 1]),
            Err(CodecError::MalformedToken(_))
        ));
        assert!(matches!(
            scatter(&sorted, &[0, 1, 3]),
            Err(CodecError::MalformedToken(_))
        ));
        assert!(matches!(
            scatter(&sorted, &[0, 1, 1]),
            Err(CodecError::MalformedToken(_))
        ));
    }

    #[test]
    fn test_permutation_length_limit() {
        let values = vec![1.0f32; MAX_PERMUTATION_LEN + 1];
        assert!(matches!(
            sort_permutation(&values),
            Err(CodecError::EncodingRange(_))
        ));
    }
}
