//! Linear-interpolation quantiles on sorted data
//!
//! The order statistic at `pos = (n − 1)·p`, interpolated between the
//! surrounding elements. Quantiles here are always unweighted: the
//! interquartile range feeds the Freedman-Diaconis bin-width rule, which is
//! defined on the raw sample.

use freq_core::{Error, Result};

/// Compute the `p`-quantile of pre-sorted data by linear interpolation.
///
/// # Arguments
/// * `sorted` - The data sample, ascending
/// * `p` - The probability (0.0 to 1.0)
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    if sorted.is_empty() {
        return Err(Error::empty_input("quantile"));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_quantile(p));
    }

    let n = sorted.len();
    if n == 1 {
        return Ok(sorted[0]);
    }

    let pos = (n - 1) as f64 * p;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return Ok(sorted[lo]);
    }

    let frac = pos - lo as f64;
    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Interquartile range of pre-sorted data: `max(0, Q3 − Q1)`.
pub fn iqr_sorted(sorted: &[f64]) -> Result<f64> {
    let q1 = quantile_sorted(sorted, 0.25)?;
    let q3 = quantile_sorted(sorted, 0.75)?;
    Ok((q3 - q1).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quantile_basic() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];

        assert_eq!(quantile_sorted(&data, 0.0).unwrap(), 1.0);
        assert_eq!(quantile_sorted(&data, 1.0).unwrap(), 5.0);
        assert_relative_eq!(quantile_sorted(&data, 0.5).unwrap(), 3.0);
        // pos = 4·0.25 = 1.0, exactly on the second element
        assert_relative_eq!(quantile_sorted(&data, 0.25).unwrap(), 2.0);
    }

    #[test]
    fn test_quantile_interpolates() {
        let data = [1.0, 2.0, 3.0, 4.0];
        // pos = 3·0.5 = 1.5 → halfway between 2 and 3
        assert_relative_eq!(quantile_sorted(&data, 0.5).unwrap(), 2.5);
        // pos = 3·0.25 = 0.75
        assert_relative_eq!(quantile_sorted(&data, 0.25).unwrap(), 1.75);
    }

    #[test]
    fn test_quantile_single_element() {
        assert_eq!(quantile_sorted(&[42.0], 0.5).unwrap(), 42.0);
        assert_eq!(quantile_sorted(&[42.0], 0.0).unwrap(), 42.0);
    }

    #[test]
    fn test_quantile_rejects_bad_p() {
        let data = [1.0, 2.0];
        assert!(quantile_sorted(&data, -0.1).is_err());
        assert!(quantile_sorted(&data, 1.1).is_err());
    }

    #[test]
    fn test_quantile_empty_is_error() {
        assert!(quantile_sorted(&[], 0.5).is_err());
    }

    #[test]
    fn test_iqr_basic() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        // Q1 = 3.0, Q3 = 7.0
        assert_relative_eq!(iqr_sorted(&data).unwrap(), 4.0);
    }

    #[test]
    fn test_iqr_constant_data_is_zero() {
        let data = [5.0, 5.0, 5.0, 5.0];
        assert_eq!(iqr_sorted(&data).unwrap(), 0.0);
    }
}
