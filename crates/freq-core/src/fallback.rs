//! Ordered-candidate fallback evaluation
//!
//! Several places in the pipeline pick the first usable value out of a
//! priority-ordered list of candidates (bin-width rule selection being the
//! main one). Expressing the chain as data keeps the fallback order auditable
//! and testable on its own, instead of burying it in nested conditionals.

/// Return the first candidate accepted by `is_valid`, in order.
pub fn first_valid<I>(candidates: I, is_valid: impl Fn(f64) -> bool) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    candidates.into_iter().find(|&c| is_valid(c))
}

/// Return the first candidate that is strictly positive and finite.
///
/// This is the validity rule shared by every bin-width candidate: a width of
/// zero, a negative width, or a NaN/infinite width would poison all
/// downstream edge arithmetic.
pub fn first_positive_finite<I>(candidates: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    first_valid(candidates, |c| c.is_finite() && c > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_positive_finite_picks_in_order() {
        assert_eq!(first_positive_finite([2.0, 5.0]), Some(2.0));
        assert_eq!(first_positive_finite([0.0, 5.0]), Some(5.0));
        assert_eq!(first_positive_finite([-1.0, 0.0, 3.0]), Some(3.0));
    }

    #[test]
    fn test_first_positive_finite_rejects_non_finite() {
        assert_eq!(first_positive_finite([f64::NAN, 4.0]), Some(4.0));
        assert_eq!(first_positive_finite([f64::INFINITY, 4.0]), Some(4.0));
        assert_eq!(first_positive_finite([f64::NAN, f64::NEG_INFINITY]), None);
    }

    #[test]
    fn test_first_positive_finite_empty() {
        assert_eq!(first_positive_finite([]), None);
    }

    #[test]
    fn test_first_valid_custom_predicate() {
        let picked = first_valid([3.0, 8.0, 12.0], |c| c > 5.0);
        assert_eq!(picked, Some(8.0));
        assert_eq!(first_valid([3.0, 4.0], |c| c > 5.0), None);
    }
}
