// File: crates/barchart-core/src/dataset.rs
// Summary: Validated, immutable numeric dataset feeding the bar layout.

use thiserror::Error;

/// The six-point sequence the original chart shipped with.
pub const SAMPLE_DATA: [f64; 6] = [4.0, 8.0, 15.0, 16.0, 23.0, 42.0];

#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("dataset is empty")]
    Empty,
    #[error("value at index {index} is negative: {value}")]
    Negative { index: usize, value: f64 },
    #[error("value at index {index} is not finite")]
    NotFinite { index: usize },
}

/// Ordered sequence of finite, non-negative values. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset(Vec<f64>);

impl Dataset {
    /// Validate and wrap a sequence. Rejects empty input, negative values,
    /// and NaN/infinite values.
    pub fn new(values: Vec<f64>) -> Result<Self, DatasetError> {
        if values.is_empty() {
            return Err(DatasetError::Empty);
        }
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(DatasetError::NotFinite { index });
            }
            if value < 0.0 {
                return Err(DatasetError::Negative { index, value });
            }
        }
        Ok(Self(values))
    }

    /// The canonical `[4, 8, 15, 16, 23, 42]` dataset.
    pub fn sample() -> Self {
        Self(SAMPLE_DATA.to_vec())
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Always >= 1; empty input never constructs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; empty input never constructs. Provided alongside
    /// `len` for slice-like completeness.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest value in the dataset.
    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(0.0, f64::max)
    }
}
