//! Weighted descriptive statistics for frequency distributions
//!
//! This crate computes the summary side of a binned frequency distribution:
//! weighted mean/variance/standard deviation, unweighted extrema, and
//! linear-interpolation quantiles with the interquartile range derived from
//! them. The histogram planner consumes `sd` and `iqr` for its automatic
//! bin-width rules.
//!
//! # Examples
//!
//! ```rust
//! use freq_summary::WeightedSummary;
//!
//! let values = [1.0, 2.0, 3.0];
//! let weights = [1.0, 2.0, 1.0];
//! let summary = WeightedSummary::from_weighted(&values, &weights).unwrap();
//!
//! assert_eq!(summary.mean, 2.0); // (1·1 + 2·2 + 3·1) / 4
//! assert_eq!(summary.min, 1.0);
//! assert_eq!(summary.max, 3.0);
//! ```

pub mod moments;
pub mod quantiles;
pub mod summary;

pub use moments::{weighted_moments, WeightedMoments};
pub use quantiles::{iqr_sorted, quantile_sorted};
pub use summary::WeightedSummary;

pub use freq_core::Result;

/// Summarize value/weight sequences of equal, non-zero length.
pub fn summarize(values: &[f64], weights: &[f64]) -> Result<WeightedSummary> {
    WeightedSummary::from_weighted(values, weights)
}
