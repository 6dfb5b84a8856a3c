//! Iterative Grubbs' test outlier elimination.
//!
//! The filter repeatedly computes the mean and sample standard deviation of
//! the measurements still under consideration, compares each sample's
//! deviation statistic against the tabulated critical value, and strips the
//! first sample found in excess. One sample is removed per round and the
//! statistics are recomputed from scratch before the next round, so a batch
//! containing several spurious readings is cleaned step by step until the
//! remaining set is internally consistent.

use crate::confidence::ConfidenceLevel;
use crate::error::{Error, Result};
use crate::table::{critical_value, MAX_SAMPLE_COUNT, MIN_SAMPLE_COUNT};
use crate::types::{FilterOutcome, Rejection};
use num_traits::{Float, NumCast};
use std::fmt;
use tracing::{debug, instrument, trace};

/// One measurement in the working set.
#[derive(Debug, Clone, Copy)]
struct Sample<T> {
    value: T,
    active: bool,
}

/// Outlier filter running Grubbs' test at a fixed confidence level.
///
/// The filter holds nothing but its [`ConfidenceLevel`], so it is `Copy` and
/// freely shareable; call sites needing different strictness construct their
/// own. Processing works on a fixed-capacity stack buffer sized to
/// [`MAX_SAMPLE_COUNT`] and performs no heap allocation, keeping call
/// latency bounded on small targets.
///
/// # Examples
///
/// ```
/// use grubbs_filter::{ConfidenceLevel, GrubbsFilter};
///
/// let filter = GrubbsFilter::new(ConfidenceLevel::P95);
/// let outcome = filter.process(&[8.2_f32, 5.4, 5.0, 5.2, 15.1, 5.3, 5.5, 6.0])?;
/// assert_eq!(outcome.rejection_count(), 2);
/// # Ok::<(), grubbs_filter::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrubbsFilter {
    level: ConfidenceLevel,
}

impl GrubbsFilter {
    /// Create a filter that rejects outliers at the given confidence level.
    pub fn new(level: ConfidenceLevel) -> Self {
        Self { level }
    }

    /// The confidence level this filter tests against.
    pub fn level(&self) -> ConfidenceLevel {
        self.level
    }

    /// Run the detect-and-remove loop on one batch of measurements.
    ///
    /// The batch must hold between [`MIN_SAMPLE_COUNT`] and
    /// [`MAX_SAMPLE_COUNT`] finite values. Within each round the sample
    /// standard deviation uses the unbiased `n − 1` divisor; a round whose
    /// active samples are all equal has no outliers by definition and ends
    /// the loop. At most one sample is rejected per round, and the loop
    /// stops once a full scan finds no statistic above the critical value
    /// or fewer than [`MIN_SAMPLE_COUNT`] samples remain.
    #[instrument(skip(self, samples), fields(count = samples.len(), level = %self.level))]
    pub fn process<T>(&self, samples: &[T]) -> Result<FilterOutcome<T>>
    where
        T: Float + fmt::Debug,
    {
        let count = samples.len();
        if !(MIN_SAMPLE_COUNT..=MAX_SAMPLE_COUNT).contains(&count) {
            return Err(Error::sample_count(count));
        }
        if let Some(index) = samples.iter().position(|x| !x.is_finite()) {
            return Err(Error::NonFiniteSample { index });
        }

        let mut working = [Sample {
            value: T::zero(),
            active: false,
        }; MAX_SAMPLE_COUNT];
        for (slot, &value) in working.iter_mut().zip(samples) {
            *slot = Sample {
                value,
                active: true,
            };
        }
        let working = &mut working[..count];

        // A suspect value is always the smallest or largest of the remaining
        // set; sorting pins both to the ends of the buffer. The scan below
        // still visits every active sample, in ascending order.
        working.sort_unstable_by(|a, b| {
            a.value
                .partial_cmp(&b.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut rejections = [Rejection {
            value: T::zero(),
            statistic: T::zero(),
            critical: T::zero(),
            sample_count: 0,
        }; MAX_SAMPLE_COUNT];
        let mut rejection_len = 0;

        loop {
            let (active, sum) = working
                .iter()
                .filter(|s| s.active)
                .fold((0usize, T::zero()), |(n, sum), s| (n + 1, sum + s.value));

            // The lookup doubles as the minimum-count guard: no critical
            // value exists once fewer than MIN_SAMPLE_COUNT samples remain.
            let critical = match critical_value(self.level, active).and_then(<T as NumCast>::from)
            {
                Some(g) => g,
                None => break,
            };

            let mean = sum / <T as NumCast>::from(active).unwrap();
            let squared_sum = working
                .iter()
                .filter(|s| s.active)
                .fold(T::zero(), |acc, s| {
                    acc + (s.value - mean) * (s.value - mean)
                });
            let variance = squared_sum / <T as NumCast>::from(active - 1).unwrap();
            let std_dev = variance.sqrt();

            trace!(active, mean = ?mean, std_dev = ?std_dev, critical = ?critical, "round statistics");

            // All remaining samples equal: nothing can be an outlier.
            if std_dev == T::zero() {
                break;
            }

            let mut removed = false;
            for slot in working.iter_mut().filter(|s| s.active) {
                let statistic = (slot.value - mean).abs() / std_dev;
                if statistic > critical {
                    slot.active = false;
                    rejections[rejection_len] = Rejection {
                        value: slot.value,
                        statistic,
                        critical,
                        sample_count: active,
                    };
                    rejection_len += 1;
                    debug!(
                        value = ?slot.value,
                        statistic = ?statistic,
                        critical = ?critical,
                        remaining = active - 1,
                        "outlier rejected"
                    );
                    removed = true;
                    break;
                }
            }

            if !removed {
                break;
            }
        }

        let mut retained = [T::zero(); MAX_SAMPLE_COUNT];
        let mut retained_len = 0;
        let mut sum = T::zero();
        for slot in working.iter().filter(|s| s.active) {
            retained[retained_len] = slot.value;
            retained_len += 1;
            sum = sum + slot.value;
        }

        // The round guard never leaves fewer than two active samples; an
        // empty set still must yield 0 rather than a zero division.
        let mean = if retained_len == 0 {
            T::zero()
        } else {
            sum / <T as NumCast>::from(retained_len).unwrap()
        };

        Ok(FilterOutcome::new(
            mean,
            retained,
            retained_len,
            rejections,
            rejection_len,
        ))
    }
}

impl Default for GrubbsFilter {
    /// A filter at the most lenient level, [`ConfidenceLevel::P80`].
    fn default() -> Self {
        Self::new(ConfidenceLevel::default())
    }
}

/// Mean of `samples` after Grubbs' outlier rejection at `level`.
///
/// One-shot convenience over [`GrubbsFilter::process`] for callers that only
/// want the cleaned value.
///
/// # Examples
///
/// ```
/// use grubbs_filter::{filtered_mean, ConfidenceLevel};
///
/// let mean = filtered_mean(&[5.0_f32, 5.0, 5.0, 5.0, 5.0], ConfidenceLevel::P95)?;
/// assert_eq!(mean, 5.0);
/// # Ok::<(), grubbs_filter::Error>(())
/// ```
pub fn filtered_mean<T>(samples: &[T], level: ConfidenceLevel) -> Result<T>
where
    T: Float + fmt::Debug,
{
    GrubbsFilter::new(level)
        .process(samples)
        .map(|outcome| outcome.mean())
}
