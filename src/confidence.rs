//! Confidence levels supported by the critical-value table.

use std::fmt;

/// Confidence level `P` for Grubbs' test, ordered strictest first.
///
/// The confidence level relates to the significance level by `P = 1 − α`.
/// A higher level makes the test stricter: a sample must deviate further
/// before it is classified as an outlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceLevel {
    /// 99% confidence (α = 0.01), the strictest supported level.
    P99,
    /// 95% confidence (α = 0.05), the conventional choice.
    P95,
    /// 90% confidence (α = 0.10).
    P90,
    /// 80% confidence (α = 0.20), the most lenient supported level.
    P80,
}

impl ConfidenceLevel {
    /// All supported levels, strictest first.
    pub const ALL: [ConfidenceLevel; 4] = [Self::P99, Self::P95, Self::P90, Self::P80];

    /// The confidence probability `P`.
    pub fn value(&self) -> f64 {
        match self {
            Self::P99 => 0.99,
            Self::P95 => 0.95,
            Self::P90 => 0.90,
            Self::P80 => 0.80,
        }
    }

    /// The significance level `α = 1 − P`.
    pub fn alpha(&self) -> f64 {
        1.0 - self.value()
    }

    /// Row index into the critical-value table.
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::P99 => 0,
            Self::P95 => 1,
            Self::P90 => 2,
            Self::P80 => 3,
        }
    }
}

impl Default for ConfidenceLevel {
    /// The most lenient level, `P80`.
    fn default() -> Self {
        Self::P80
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.value() * 100.0)
    }
}
