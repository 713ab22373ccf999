use serde::{Deserialize, Serialize};

use crate::codec::LossyQuantizer;
use crate::error::Result;

use super::{F32Codec, F32LossyCodec, FixedPointCodec, SortedDeltaCodec, SpectrumCodec};

/// Spectrum codec selection, as written in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SpectrumCodecKind {
    /// Delta-coded m/z, raw hex intensities (lossless)
    F32,
    /// Delta-coded m/z, log-quantized intensities
    F32Lossy {
        /// Intensity code width in bits
        #[serde(default = "default_bits")]
        bits: u32,
    },
    /// Delta-coded m/z and sorted intensities plus permutation (lossless)
    SortedDelta,
    /// Fixed-decimal m/z, log-quantized intensities
    FixedPoint {
        /// Decimal places kept for m/z
        #[serde(default = "default_mz_precision")]
        mz_precision: u32,
        /// Intensity code width in bits
        #[serde(default = "default_bits")]
        bits: u32,
    },
}

fn default_bits() -> u32 {
    LossyQuantizer::DEFAULT_BITS
}

fn default_mz_precision() -> u32 {
    FixedPointCodec::DEFAULT_MZ_PRECISION
}

impl Default for SpectrumCodecKind {
    fn default() -> Self {
        Self::F32
    }
}

impl SpectrumCodecKind {
    /// Every kind with default parameters
    pub fn all() -> [Self; 4] {
        [
            Self::F32,
            Self::F32Lossy {
                bits: default_bits(),
            },
            Self::SortedDelta,
            Self::FixedPoint {
                mz_precision: default_mz_precision(),
                bits: default_bits(),
            },
        ]
    }

    /// Instantiate the codec, validating its parameters
    pub fn build(&self) -> Result<Box<dyn SpectrumCodec>> {
        Ok(match *self {
            Self::F32 => Box::new(F32Codec),
            Self::F32Lossy { bits } => Box::new(F32LossyCodec::new(bits)?),
            Self::SortedDelta => Box::new(SortedDeltaCodec),
            Self::FixedPoint { mz_precision, bits } => {
                Box::new(FixedPointCodec::new(mz_precision, bits)?)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        spectrum: SpectrumCodecKind,
    }

    #[test]
    fn test_parse_kinds() {
        let parsed: Wrapper = toml::from_str(r#"spectrum = { kind = "f32" }"#).unwrap();
        assert_eq!(parsed.spectrum, SpectrumCodecKind::F32);

        let parsed: Wrapper =
            toml::from_str(r#"spectrum = { kind = "f32-lossy", bits = 12 }"#).unwrap();
        assert_eq!(parsed.spectrum, SpectrumCodecKind::F32Lossy { bits: 12 });

        let parsed: Wrapper = toml::from_str(r#"spectrum = { kind = "fixed-point" }"#).unwrap();
        assert_eq!(
            parsed.spectrum,
            SpectrumCodecKind::FixedPoint {
                mz_precision: 2,
                bits: 8
            }
        );
    }

    #[test]
    fn test_build_names() {
        let names: Vec<String> = SpectrumCodecKind::all()
            .iter()
            .map(|kind| kind.build().unwrap().name())
            .collect();
        assert_eq!(
            names,
            vec!["f32", "f32-lossy8", "sorted-delta", "fixed-point2-8"]
        );
    }

    #[test]
    fn test_build_validates_parameters() {
        assert!(SpectrumCodecKind::F32Lossy { bits: 0 }.build().is_err());
        assert!(SpectrumCodecKind::FixedPoint {
            mz_precision: 12,
            bits: 8
        }
        .build()
        .is_err());
    }
}
