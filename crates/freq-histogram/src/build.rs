//! Bin construction
//!
//! Converts raw slot aggregates into the public bin representation:
//! boundaries, center, percent, density, and the optional cumulative
//! measures.

use crate::accumulate::SlotAccumulator;
use crate::config::TailCapture;
use crate::types::Bin;

/// Build the ordered public bin sequence from slot aggregates.
///
/// `total_weight` must be strictly positive; the orchestrator short-circuits
/// to an empty result before this stage otherwise.
pub fn build_bins(
    acc: SlotAccumulator,
    edges: &[f64],
    width: f64,
    tails: TailCapture,
    total_weight: f64,
    cumulative: bool,
) -> Vec<Bin> {
    let bins_in_range = edges.len() - 1;
    let lead = usize::from(tails.underflow);
    let slots = bins_in_range + tails.extra_slots();

    let mut bins = Vec::with_capacity(slots);
    let mut running = 0.0;

    let SlotAccumulator { counts, items } = acc;

    for (slot, (count, item_list)) in counts.into_iter().zip(items).enumerate() {
        let (start, end) = if tails.underflow && slot == 0 {
            (f64::NEG_INFINITY, edges[0])
        } else if tails.overflow && slot == slots - 1 {
            (edges[bins_in_range], f64::INFINITY)
        } else {
            let i = slot - lead;
            (edges[i], edges[i + 1])
        };

        let bin_width = {
            let w = end - start;
            if w.is_finite() && w > 0.0 {
                w
            } else {
                // Guards the infinite-width tail slots
                width.max(f64::EPSILON)
            }
        };

        let center = if start.is_finite() && end.is_finite() {
            (start + end) / 2.0
        } else if start.is_finite() {
            start
        } else {
            end
        };

        running += count;
        let (cumulative_count, cumulative_percent, cumulative_density) = if cumulative {
            (
                Some(running),
                Some(100.0 * running / total_weight),
                Some(running / total_weight),
            )
        } else {
            (None, None, None)
        };

        bins.push(Bin {
            index: slot,
            start,
            end,
            center,
            width: bin_width,
            count,
            percent: 100.0 * count / total_weight,
            density: count / (total_weight * bin_width),
            cumulative_count,
            cumulative_percent,
            cumulative_density,
            items: item_list,
        });
    }

    bins
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn acc(counts: Vec<f64>) -> SlotAccumulator {
        let items = counts.iter().map(|_| Vec::new()).collect();
        SlotAccumulator { counts, items }
    }

    #[test]
    fn test_interior_bins() {
        let edges = [0.0, 1.0, 2.0];
        let bins = build_bins(
            acc(vec![3.0, 1.0]),
            &edges,
            1.0,
            TailCapture::none(),
            4.0,
            false,
        );

        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].index, 0);
        assert_eq!(bins[0].start, 0.0);
        assert_eq!(bins[0].end, 1.0);
        assert_relative_eq!(bins[0].center, 0.5);
        assert_relative_eq!(bins[0].percent, 75.0);
        assert_relative_eq!(bins[0].density, 0.75);
        assert_eq!(bins[0].cumulative_count, None);
        assert_relative_eq!(bins[1].percent, 25.0);
    }

    #[test]
    fn test_tail_slot_boundaries() {
        let edges = [0.0, 1.0, 2.0];
        let bins = build_bins(
            acc(vec![1.0, 2.0, 1.0, 1.0]),
            &edges,
            1.0,
            TailCapture::both(),
            5.0,
            false,
        );

        assert_eq!(bins.len(), 4);
        assert_eq!(bins[0].start, f64::NEG_INFINITY);
        assert_eq!(bins[0].end, 0.0);
        // Center falls back to the finite bound
        assert_eq!(bins[0].center, 0.0);
        // Width falls back to the planner width
        assert_eq!(bins[0].width, 1.0);
        assert!(bins[0].density.is_finite());

        assert_eq!(bins[3].start, 2.0);
        assert_eq!(bins[3].end, f64::INFINITY);
        assert_eq!(bins[3].center, 2.0);

        // Interior bins keep their edge pairs
        assert_eq!(bins[1].start, 0.0);
        assert_eq!(bins[2].end, 2.0);
    }

    #[test]
    fn test_cumulative_measures() {
        let edges = [0.0, 1.0, 2.0];
        let bins = build_bins(
            acc(vec![1.0, 3.0]),
            &edges,
            1.0,
            TailCapture::none(),
            4.0,
            true,
        );

        assert_eq!(bins[0].cumulative_count, Some(1.0));
        assert_eq!(bins[1].cumulative_count, Some(4.0));
        assert_relative_eq!(bins[0].cumulative_percent.unwrap(), 25.0);
        assert_relative_eq!(bins[1].cumulative_percent.unwrap(), 100.0);
        assert_relative_eq!(bins[1].cumulative_density.unwrap(), 1.0);
    }

    #[test]
    fn test_percent_sums_to_hundred() {
        let edges = [0.0, 1.0, 2.0, 3.0];
        let bins = build_bins(
            acc(vec![1.0, 2.0, 3.0]),
            &edges,
            1.0,
            TailCapture::none(),
            6.0,
            false,
        );
        let total: f64 = bins.iter().map(|b| b.percent).sum();
        assert_relative_eq!(total, 100.0);
    }

    #[test]
    fn test_items_carried_through() {
        let edges = [0.0, 1.0];
        let accumulator = SlotAccumulator {
            counts: vec![2.0],
            items: vec![vec![4, 7]],
        };
        let bins = build_bins(accumulator, &edges, 1.0, TailCapture::none(), 2.0, false);
        assert_eq!(bins[0].items, vec![4, 7]);
    }
}
