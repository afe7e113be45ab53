//! Value-to-bin classification and weighted accumulation
//!
//! Maps each observation to an output slot under the configured
//! edge-inclusion rule, aggregating weighted counts and the contributing
//! input indices. Underflow/overflow slots are optional; when a tail slot is
//! disabled, out-of-range observations are dropped from every aggregate —
//! they still contribute to the summary's total weight upstream, which is
//! why in-range percents can sum below 100 in that configuration.

use crate::config::{EdgeRule, TailCapture};
use crate::extract::Observations;
use freq_core::{Error, Result};

/// Absolute tolerance for folding a value on the upper domain bound into the
/// last in-range bin under [`EdgeRule::ClosedRight`].
pub const EDGE_SNAP_TOLERANCE: f64 = 1e-12;

/// Raw per-slot aggregates, in emission order.
///
/// Slot count is `bin_count + underflow + overflow`; the underflow slot (if
/// enabled) comes first and the overflow slot (if enabled) last.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotAccumulator {
    /// Weighted count per slot
    pub counts: Vec<f64>,
    /// Original input indices of contributing observations, per slot
    pub items: Vec<Vec<usize>>,
}

/// Where a single value lands relative to the in-range bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Below,
    Bin(usize),
    Above,
}

fn classify(x: f64, start: f64, upper: f64, width: f64, bins: usize, rule: EdgeRule) -> Placement {
    let idx = ((x - start) / width).floor();
    if idx < 0.0 {
        return Placement::Below;
    }
    let idx = idx as usize;
    if idx >= bins {
        // ClosedRight folds a value sitting on the exact upper bound into
        // the last bin instead of the overflow slot.
        if rule == EdgeRule::ClosedRight && (x - upper).abs() <= EDGE_SNAP_TOLERANCE {
            return Placement::Bin(bins - 1);
        }
        return Placement::Above;
    }
    Placement::Bin(idx)
}

/// Accumulate weighted counts and item lists for every output slot.
///
/// Fewer than two edges reaching this stage is a planner defect, not a data
/// problem, and raises a structural error.
pub fn accumulate(
    obs: &Observations,
    edges: &[f64],
    width: f64,
    edge_rule: EdgeRule,
    tails: TailCapture,
) -> Result<SlotAccumulator> {
    if edges.len() < 2 {
        return Err(Error::InvalidInput(format!(
            "bin edge sequence must contain at least two edges, got {}",
            edges.len()
        )));
    }

    let bins = edges.len() - 1;
    let start = edges[0];
    let upper = edges[bins];
    let slots = bins + tails.extra_slots();
    let lead = usize::from(tails.underflow);

    let mut counts = vec![0.0; slots];
    let mut items: Vec<Vec<usize>> = vec![Vec::new(); slots];

    for ((&x, &w), &index) in obs.values.iter().zip(&obs.weights).zip(&obs.indices) {
        let slot = match classify(x, start, upper, width, bins, edge_rule) {
            Placement::Below => tails.underflow.then_some(0),
            Placement::Bin(i) => Some(i + lead),
            Placement::Above => tails.overflow.then_some(lead + bins),
        };
        // A disabled tail slot drops the observation entirely.
        if let Some(slot) = slot {
            counts[slot] += w;
            items[slot].push(index);
        }
    }

    Ok(SlotAccumulator { counts, items })
}
