//! Domain resolution
//!
//! Normalizes the caller-specified or observed span into a strictly
//! increasing closed interval. Resolution never fails; every correction is
//! reported as a warning.

use std::fmt;

/// Relative expansion applied to a degenerate (single-point) domain.
const DEGENERATE_EXPANSION: f64 = 1e-6;

/// The numeric span a histogram covers, with `start < end` strictly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Lower bound (inclusive)
    pub start: f64,
    /// Upper bound (inclusive)
    pub end: f64,
}

impl Domain {
    /// Span width.
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// The `[0, 1]` placeholder used by empty results.
    pub fn unit() -> Self {
        Self {
            start: 0.0,
            end: 1.0,
        }
    }

    /// Resolve a usable domain from an optional request and the observed
    /// extrema.
    ///
    /// Non-finite requested endpoints are discarded in favor of the observed
    /// span; reversed bounds are swapped; a zero-width span is expanded
    /// symmetrically. Each correction appends one warning.
    pub fn resolve(
        requested: Option<(f64, f64)>,
        observed_min: f64,
        observed_max: f64,
    ) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        let (mut d0, mut d1) = match requested {
            Some((lo, hi)) if lo.is_finite() && hi.is_finite() => (lo, hi),
            Some((lo, hi)) => {
                warnings.push(format!(
                    "Domain [{lo}, {hi}] has non-finite bounds; using observed range instead"
                ));
                (observed_min, observed_max)
            }
            None => (observed_min, observed_max),
        };

        if d0 > d1 {
            warnings.push(format!("Domain [{d0}, {d1}] is reversed; swapping bounds"));
            std::mem::swap(&mut d0, &mut d1);
        }

        if d0 == d1 {
            let eps = if d0 == 0.0 {
                1.0
            } else {
                d0.abs() * DEGENERATE_EXPANSION
            };
            warnings.push(format!(
                "Domain [{d0}, {d1}] has zero width; expanding by {eps} on each side"
            ));
            d0 -= eps;
            d1 += eps;
        }

        (Self { start: d0, end: d1 }, warnings)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.start, self.end)
    }
}
