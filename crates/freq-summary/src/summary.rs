//! Whole-dataset descriptive summary
//!
//! Composes weighted moments, unweighted extrema, and the unweighted IQR
//! into one read-only value scoped to a single computation.

use crate::moments::weighted_moments;
use crate::quantiles::iqr_sorted;
use freq_core::utils::sorted;
use freq_core::{Error, Result};
use std::fmt;

/// Descriptive statistics of one observation set.
///
/// `min`/`max`/`iqr` are unweighted; `mean`/`variance`/`sd` are weighted
/// (population form). All fields are derived once and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedSummary {
    /// Raw count of valid observations
    pub n: usize,
    /// Sum of all weights
    pub total_weight: f64,
    /// Smallest observed value
    pub min: f64,
    /// Largest observed value
    pub max: f64,
    /// Weighted mean
    pub mean: f64,
    /// Weighted population variance
    pub variance: f64,
    /// Weighted standard deviation
    pub sd: f64,
    /// Unweighted interquartile range
    pub iqr: f64,
}

impl WeightedSummary {
    /// Summarize non-empty value/weight sequences of equal length.
    ///
    /// One pass for the moments and extrema, plus one sort for the IQR.
    pub fn from_weighted(values: &[f64], weights: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::empty_input("summary"));
        }
        let moments = weighted_moments(values, weights)?;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &x in values {
            if x < min {
                min = x;
            }
            if x > max {
                max = x;
            }
        }

        let iqr = iqr_sorted(&sorted(values))?;

        Ok(Self {
            n: values.len(),
            total_weight: moments.total_weight,
            min,
            max,
            mean: moments.mean,
            variance: moments.variance,
            sd: moments.sd,
            iqr,
        })
    }

    /// All-zero summary used by the empty-result sentinel.
    pub fn zero() -> Self {
        Self {
            n: 0,
            total_weight: 0.0,
            min: 0.0,
            max: 0.0,
            mean: 0.0,
            variance: 0.0,
            sd: 0.0,
            iqr: 0.0,
        }
    }

    /// Span of the observed values.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

impl fmt::Display for WeightedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Summary(n={}, w={:.3}, range=[{:.3}, {:.3}], mean={:.3}, sd={:.3}, iqr={:.3})",
            self.n, self.total_weight, self.min, self.max, self.mean, self.sd, self.iqr
        )
    }
}
