//! Outcome types for the filter.

use crate::table::MAX_SAMPLE_COUNT;
use num_traits::Float;
use std::fmt;

/// A single elimination decision made by the filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rejection<T> {
    /// The rejected measurement.
    pub value: T,
    /// Deviation statistic `G_i = |x − mean| / s` in the round that removed it.
    pub statistic: T,
    /// Critical value `G_p(n)` the statistic exceeded.
    pub critical: T,
    /// Number of samples still under consideration in that round.
    pub sample_count: usize,
}

/// Report of one filtering pass: the survivor mean plus which samples were
/// kept and which were eliminated, round by round.
///
/// Backed by fixed-capacity buffers, so constructing one never allocates.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<T> {
    mean: T,
    retained: [T; MAX_SAMPLE_COUNT],
    retained_len: usize,
    rejections: [Rejection<T>; MAX_SAMPLE_COUNT],
    rejection_len: usize,
}

impl<T: Float> FilterOutcome<T> {
    pub(crate) fn new(
        mean: T,
        retained: [T; MAX_SAMPLE_COUNT],
        retained_len: usize,
        rejections: [Rejection<T>; MAX_SAMPLE_COUNT],
        rejection_len: usize,
    ) -> Self {
        Self {
            mean,
            retained,
            retained_len,
            rejections,
            rejection_len,
        }
    }

    /// Mean of the samples that survived elimination.
    pub fn mean(&self) -> T {
        self.mean
    }

    /// Surviving samples in ascending order.
    pub fn retained(&self) -> &[T] {
        &self.retained[..self.retained_len]
    }

    /// Number of surviving samples.
    pub fn retained_count(&self) -> usize {
        self.retained_len
    }

    /// Eliminations in the order they happened, one per round.
    pub fn rejections(&self) -> &[Rejection<T>] {
        &self.rejections[..self.rejection_len]
    }

    /// Number of samples classified as outliers.
    pub fn rejection_count(&self) -> usize {
        self.rejection_len
    }

    /// Size of the input batch.
    pub fn input_count(&self) -> usize {
        self.retained_len + self.rejection_len
    }

    /// Whether the batch came through without a single rejection.
    pub fn is_clean(&self) -> bool {
        self.rejection_len == 0
    }
}

impl<T: Float + fmt::Display> fmt::Display for FilterOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean {:.3} ({} of {} samples retained)",
            self.mean,
            self.retained_count(),
            self.input_count()
        )
    }
}
