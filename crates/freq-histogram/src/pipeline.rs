//! Computation pipeline
//!
//! Sequences extraction → summary → domain resolution → bin planning →
//! accumulation → bin construction, concatenating each stage's warnings in
//! call order. Data-quality problems never raise; the two escape hatches
//! (no valid observations, zero total weight) return a well-formed empty
//! result instead.

use crate::accumulate::accumulate;
use crate::build::build_bins;
use crate::config::HistogramConfig;
use crate::domain::Domain;
use crate::extract::Observations;
use crate::plan::plan_bins;
use crate::types::Histogram;
use freq_core::Result;
use freq_summary::WeightedSummary;
use tracing::debug;

pub(crate) fn compute(
    obs: Observations,
    mut warnings: Vec<String>,
    config: &HistogramConfig,
) -> Result<Histogram> {
    if obs.is_empty() {
        warnings.push("No valid data; returning empty result".to_string());
        debug!("histogram: no valid observations after extraction");
        return Ok(Histogram::empty(warnings));
    }

    let summary = WeightedSummary::from_weighted(&obs.values, &obs.weights)?;
    if summary.total_weight <= 0.0 {
        warnings.push("Total weight is zero; returning empty result".to_string());
        debug!("histogram: zero total weight after filtering");
        return Ok(Histogram::empty(warnings));
    }
    debug!(
        "histogram: summarized n={} total_weight={}",
        summary.n, summary.total_weight
    );

    let (domain, domain_warnings) = Domain::resolve(config.domain, summary.min, summary.max);
    warnings.extend(domain_warnings);

    let (plan, plan_warnings) = plan_bins(&domain, summary.n, summary.iqr, summary.sd, &config.strategy);
    warnings.extend(plan_warnings);
    debug!(
        "histogram: planned {} bins of width {} over {}",
        plan.bin_count(),
        plan.width,
        domain
    );

    let acc = accumulate(&obs, &plan.edges, plan.width, config.edge_rule, config.tails)?;
    let bins = build_bins(
        acc,
        &plan.edges,
        plan.width,
        config.tails,
        summary.total_weight,
        config.cumulative,
    );

    for warning in &warnings {
        debug!("histogram warning: {warning}");
    }

    Ok(Histogram::new(bins, domain, plan.width, summary, warnings))
}
