//! Weighted first and second moments
//!
//! Population-form, weight-normalized mean and variance computed in a single
//! pass over the observation sequences.

use freq_core::{Error, Result};

/// Weighted mean, variance, and standard deviation of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedMoments {
    /// Sum of all weights
    pub total_weight: f64,
    /// Weighted mean: Σ(x·w) / Σw
    pub mean: f64,
    /// Population variance: Σ(x²·w)/Σw − mean², clamped at zero
    pub variance: f64,
    /// Standard deviation: sqrt(variance)
    pub sd: f64,
}

/// Compute weighted moments in one pass.
///
/// The variance is clamped at zero to absorb floating-point cancellation in
/// the E[x²] − mean² form.
///
/// Callers guarantee non-empty input and matching lengths; violations are
/// structural errors.
pub fn weighted_moments(values: &[f64], weights: &[f64]) -> Result<WeightedMoments> {
    if values.is_empty() {
        return Err(Error::empty_input("weighted moments"));
    }
    if values.len() != weights.len() {
        return Err(Error::size_mismatch(
            values.len(),
            weights.len(),
            "weight vector",
        ));
    }

    let mut total_weight = 0.0;
    let mut weighted_sum = 0.0;
    let mut weighted_sq_sum = 0.0;
    for (&x, &w) in values.iter().zip(weights) {
        total_weight += w;
        weighted_sum += x * w;
        weighted_sq_sum += x * x * w;
    }

    let mean = weighted_sum / total_weight;
    let variance = (weighted_sq_sum / total_weight - mean * mean).max(0.0);

    Ok(WeightedMoments {
        total_weight,
        mean,
        variance,
        sd: variance.sqrt(),
    })
}
