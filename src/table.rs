//! Grubbs' critical values `G_p(n)`.
//!
//! The critical value depends on two parameters: the detection level α
//! (through the confidence probability `P = 1 − α`) and the number of
//! measurements `n`. Rows hold the four supported confidence levels,
//! strictest first; column `i` holds the value for `n = i + 3`, covering
//! the full supported range `n ∈ [3, 20]`.

use crate::confidence::ConfidenceLevel;

/// Smallest batch the test is defined for.
pub const MIN_SAMPLE_COUNT: usize = 3;

/// Largest batch the table covers.
pub const MAX_SAMPLE_COUNT: usize = 20;

/// Number of supported sample counts (`n = 3..=20`).
const SUPPORTED_COUNTS: usize = MAX_SAMPLE_COUNT - MIN_SAMPLE_COUNT + 1;

/// One-sided critical values for α = 0.01, 0.05, 0.10 and 0.20.
#[rustfmt::skip]
const CRITICAL_VALUES: [[f64; SUPPORTED_COUNTS]; 4] = [
    // P = 99%
    [1.155, 1.492, 1.749, 1.944, 2.097, 2.220, 2.323, 2.410, 2.485,
     2.550, 2.607, 2.659, 2.705, 2.747, 2.785, 2.821, 2.854, 2.884],
    // P = 95%
    [1.153, 1.463, 1.672, 1.822, 1.938, 2.032, 2.110, 2.176, 2.234,
     2.285, 2.331, 2.371, 2.409, 2.443, 2.475, 2.501, 2.532, 2.557],
    // P = 90%
    [1.148, 1.425, 1.602, 1.729, 1.828, 1.909, 1.977, 2.036, 2.088,
     2.134, 2.175, 2.213, 2.247, 2.279, 2.309, 2.335, 2.361, 2.385],
    // P = 80%
    [1.148, 1.156, 1.252, 1.329, 1.428, 1.509, 1.577, 1.636, 1.688,
     1.734, 1.775, 1.813, 1.847, 1.879, 1.909, 1.935, 1.961, 1.985],
];

/// Critical value `G_p(n)` for `n` samples at the given confidence level.
///
/// Returns `None` when `n` lies outside
/// `[MIN_SAMPLE_COUNT, MAX_SAMPLE_COUNT]`: the test is not defined below
/// three samples, and the table stops at twenty.
pub fn critical_value(level: ConfidenceLevel, n: usize) -> Option<f64> {
    if !(MIN_SAMPLE_COUNT..=MAX_SAMPLE_COUNT).contains(&n) {
        return None;
    }
    Some(CRITICAL_VALUES[level.index()][n - MIN_SAMPLE_COUNT])
}
