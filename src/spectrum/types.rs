use serde::{Deserialize, Serialize};

/// Paired m/z and intensity arrays of one spectrum.
///
/// `mz[i]` pairs with `intensity[i]`. m/z values are conventionally
/// non-decreasing, which the delta codec exploits, but nothing here enforces
/// it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpectrumArrays {
    /// Mass-to-charge ratios
    pub mz: Vec<f32>,
    /// Peak intensities (positive for the lossy codecs)
    pub intensity: Vec<f32>,
}

impl SpectrumArrays {
    /// Create a spectrum from its two arrays
    pub fn new(mz: Vec<f32>, intensity: Vec<f32>) -> Self {
        Self { mz, intensity }
    }

    /// Returns the number of peaks
    pub fn len(&self) -> usize {
        self.mz.len()
    }

    /// Returns true if there are no peaks
    pub fn is_empty(&self) -> bool {
        self.mz.is_empty()
    }

    /// Validate that both arrays have matching lengths
    pub fn validate(&self) -> Result<(), String> {
        if self.intensity.len() != self.mz.len() {
            return Err(format!(
                "intensity length {} does not match mz length {}",
                self.intensity.len(),
                self.mz.len()
            ));
        }
        Ok(())
    }

    /// True if the m/z array is non-decreasing
    pub fn is_mz_sorted(&self) -> bool {
        is_non_decreasing(&self.mz)
    }

    /// Plain decimal JSON rendering, the baseline tokens are measured against
    pub fn to_decimal_json(&self) -> String {
        // Serializing two float vectors cannot fail
        serde_json::to_string(&(&self.mz, &self.intensity)).unwrap_or_default()
    }
}

impl From<(Vec<f32>, Vec<f32>)> for SpectrumArrays {
    fn from((mz, intensity): (Vec<f32>, Vec<f32>)) -> Self {
        Self::new(mz, intensity)
    }
}

impl From<SpectrumArrays> for (Vec<f32>, Vec<f32>) {
    fn from(spectrum: SpectrumArrays) -> Self {
        (spectrum.mz, spectrum.intensity)
    }
}

pub(crate) fn is_non_decreasing(values: &[f32]) -> bool {
    values
        .windows(2)
        .all(|w| w[0].total_cmp(&w[1]) != std::cmp::Ordering::Greater)
}
