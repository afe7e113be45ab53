//! Bin planning
//!
//! Chooses a bin width via the configured strategy, bounds the bin count,
//! and emits the uniform edge sequence. The automatic rules follow the
//! standard bin-width literature: Freedman-Diaconis `2·IQR·n^(−1/3)`,
//! Scott `3.5·σ·n^(−1/3)`, and Sturges `range / ceil(log2(n) + 1)`.

use crate::config::{BinWidthRule, BinningStrategy};
use crate::domain::Domain;
use freq_core::first_positive_finite;

/// Hard ceiling on the number of in-range bins.
///
/// Bounds worst-case memory for a single computation; a caller-specified
/// sub-epsilon width would otherwise ask for an unbounded edge vector.
pub const MAX_BIN_COUNT: usize = 10_000;

/// The planner's output: final width and the full edge sequence.
///
/// Edges are `bin_count + 1` strictly increasing points with uniform spacing
/// `width`; the last edge is snapped to the domain's exact upper bound, so
/// the final interval may differ from `width` infinitesimally.
#[derive(Debug, Clone, PartialEq)]
pub struct BinPlan {
    /// Uniform bin width
    pub width: f64,
    /// `bin_count + 1` edges from domain start to domain end
    pub edges: Vec<f64>,
}

impl BinPlan {
    /// Number of in-range bins.
    pub fn bin_count(&self) -> usize {
        self.edges.len() - 1
    }
}

/// Plan bin width and edges for the resolved domain.
pub fn plan_bins(
    domain: &Domain,
    n: usize,
    iqr: f64,
    sd: f64,
    strategy: &BinningStrategy,
) -> (BinPlan, Vec<String>) {
    let mut warnings = Vec::new();
    let range = domain.width();

    let mut width = match *strategy {
        BinningStrategy::Auto(rule) => auto_width(range, n, iqr, sd, rule),
        BinningStrategy::Width(w) => w,
        BinningStrategy::Count(count) => range / count.max(1) as f64,
    };
    width = clamp_width(width);

    let mut bin_count = ((range / width).ceil() as usize).max(1);
    if bin_count > MAX_BIN_COUNT {
        warnings.push(format!(
            "Requested binning would produce {bin_count} bins; capped at {MAX_BIN_COUNT}"
        ));
        width = clamp_width(range / MAX_BIN_COUNT as f64);
        bin_count = MAX_BIN_COUNT;
    }

    let mut edges = Vec::with_capacity(bin_count + 1);
    for i in 0..bin_count {
        edges.push(domain.start + i as f64 * width);
    }
    // Snap the final edge to the exact bound so floating-point drift cannot
    // leave a gap or overlap at the domain boundary.
    edges.push(domain.end);

    (BinPlan { width, edges }, warnings)
}

/// First strictly positive, finite candidate in the rule's priority order.
fn auto_width(range: f64, n: usize, iqr: f64, sd: f64, rule: BinWidthRule) -> f64 {
    let safe_n = n.max(1) as f64;
    let inv_cbrt = safe_n.powf(-1.0 / 3.0);

    let fd = 2.0 * iqr * inv_cbrt;
    let scott = 3.5 * sd * inv_cbrt;
    let sturges = range / (safe_n.log2() + 1.0).ceil().max(1.0);

    let candidates: Vec<f64> = match rule {
        BinWidthRule::FreedmanDiaconis => vec![fd, scott, sturges],
        BinWidthRule::Scott => vec![scott, fd, sturges],
        BinWidthRule::Sturges => vec![sturges],
    };

    first_positive_finite(candidates).unwrap_or(if range > 0.0 { range } else { 1.0 })
}

fn clamp_width(width: f64) -> f64 {
    if !width.is_finite() || width <= 0.0 {
        return 1.0;
    }
    width.max(f64::EPSILON)
}
