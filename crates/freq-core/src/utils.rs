//! Utility functions for working with data slices

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use freq_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => std::cmp::Ordering::Equal,
            (true, false) => std::cmp::Ordering::Greater, // NaN goes after non-NaN
            (false, true) => std::cmp::Ordering::Less,    // non-NaN goes before NaN
            (false, false) => a.partial_cmp(b).unwrap(),  // Safe for non-NaN values
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_basic() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_sorted_empty() {
        let data: Vec<f64> = vec![];
        assert_eq!(sorted(&data), Vec::<f64>::new());
    }

    #[test]
    fn test_sorted_duplicates() {
        let data = vec![3.0, 1.0, 3.0, 2.0, 1.0];
        assert_eq!(sorted(&data), vec![1.0, 1.0, 2.0, 3.0, 3.0]);
    }

    #[test]
    fn test_sorted_with_nan() {
        let data = vec![3.0, f64::NAN, 1.0, 2.0];
        let sorted_data = sorted(&data);

        assert_eq!(sorted_data[0], 1.0);
        assert_eq!(sorted_data[1], 2.0);
        assert_eq!(sorted_data[2], 3.0);
        assert!(sorted_data[3].is_nan());
    }

    #[test]
    fn test_sorted_preserves_original() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        let original = data.clone();
        let _ = sorted(&data);
        assert_eq!(data, original);
    }
}
