//! Error types for outlier filtering.

use crate::table::{MAX_SAMPLE_COUNT, MIN_SAMPLE_COUNT};
use thiserror::Error;

/// Error type for batch validation failures.
///
/// The filter itself cannot fail once a batch passes validation; every
/// numeric edge case inside the elimination loop is recovered locally.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Batch size outside the range the critical-value table covers.
    #[error("unsupported sample count: expected {min}..={max} samples, got {actual}")]
    SampleCountOutOfRange {
        /// Number of samples actually supplied.
        actual: usize,
        /// Smallest supported batch.
        min: usize,
        /// Largest supported batch.
        max: usize,
    },

    /// A sample was NaN or infinite.
    #[error("non-finite sample at index {index}")]
    NonFiniteSample {
        /// Position of the offending sample in the input.
        index: usize,
    },
}

impl Error {
    /// Create a count error carrying the supported bounds.
    pub fn sample_count(actual: usize) -> Self {
        Self::SampleCountOutOfRange {
            actual,
            min: MIN_SAMPLE_COUNT,
            max: MAX_SAMPLE_COUNT,
        }
    }
}

/// Result type alias using our [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
