//! Grubbs' test outlier filtering for small measurement batches
//!
//! This crate cleans small bursts of measurements (3 to 20 samples) with the
//! classical Grubbs' test, iteratively removing values that deviate too far
//! from the rest, and reports the mean of the survivors. Typical input is a
//! burst of sensor readings containing the odd glitched conversion or
//! transient spike.
//!
//! # Algorithm Overview
//!
//! One [`GrubbsFilter::process`] call works by:
//! 1. Copying the batch into a fixed-capacity working set, sorted ascending
//! 2. Computing the mean and sample standard deviation of the samples still
//!    under consideration
//! 3. Comparing each sample's deviation statistic `G_i = |x − mean| / s`
//!    against the tabulated critical value `G_p(n)` for the configured
//!    confidence level, removing the first sample in ascending order that
//!    exceeds it
//! 4. Repeating from step 2 (one removal per round) until a full scan
//!    removes nothing or fewer than three samples remain
//! 5. Returning the mean over the surviving samples
//!
//! # Key Features
//!
//! - **Bounded**: fixed-capacity stack buffers, no heap allocation per call
//! - **Configurable**: four confidence levels, from a lenient 80% up to a
//!   strict 99%
//! - **Diagnosable**: every rejection is reported with its value, statistic,
//!   and the threshold it exceeded
//! - **Generic**: processes `f32` and `f64` batches alike
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust
//! use grubbs_filter::{ConfidenceLevel, GrubbsFilter};
//!
//! // A burst of eight readings with two spurious values in it.
//! let readings = [8.2_f32, 5.4, 5.0, 5.2, 15.1, 5.3, 5.5, 6.0];
//! let outcome = GrubbsFilter::new(ConfidenceLevel::P95).process(&readings)?;
//!
//! let rejected: Vec<f32> = outcome.rejections().iter().map(|r| r.value).collect();
//! assert_eq!(rejected, vec![15.1, 8.2]);
//! assert!((outcome.mean() - 5.4).abs() < 1e-3);
//! # Ok::<(), grubbs_filter::Error>(())
//! ```
//!
//! ## One-Shot Mean
//!
//! ```rust
//! use grubbs_filter::{filtered_mean, ConfidenceLevel};
//!
//! let mean = filtered_mean(&[5.0_f32; 5], ConfidenceLevel::P80)?;
//! assert_eq!(mean, 5.0);
//! # Ok::<(), grubbs_filter::Error>(())
//! ```

pub mod confidence;
pub mod error;
pub mod filter;
pub mod table;
pub mod types;

pub use confidence::ConfidenceLevel;
pub use error::{Error, Result};
pub use filter::{filtered_mean, GrubbsFilter};
pub use table::{critical_value, MAX_SAMPLE_COUNT, MIN_SAMPLE_COUNT};
pub use types::{FilterOutcome, Rejection};
