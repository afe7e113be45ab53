//! Weighted frequency distributions with automatic bin selection
//!
//! This crate computes a binned frequency distribution (a histogram) and
//! descriptive summary statistics from a sequence of observations, each
//! optionally weighted. It is a headless analytical primitive: presentation
//! layers consume the immutable [`Histogram`] result and never reach back
//! into the pipeline.
//!
//! # Key Features
//!
//! - **Automatic bin widths**: Freedman-Diaconis, Scott, and Sturges rules
//!   with a priority fallback chain for degenerate spreads
//! - **Weighted observations**: per-observation weights flow into counts,
//!   percents, densities, and the summary statistics
//! - **Underflow/overflow capture**: optional extra slots for out-of-range
//!   observations instead of silent discarding
//! - **Robust to degenerate input**: zero-width domains, single-point
//!   datasets, non-finite values, and oversized bin requests are corrected
//!   and reported as warnings, never errors
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust
//! use freq_histogram::{histogram, HistogramConfig};
//!
//! let data = vec![1.0, 2.0, 2.0, 3.0, 4.0, 6.0, 9.0, 9.0, 10.0];
//! let hist = histogram(&data, &HistogramConfig::default()).unwrap();
//!
//! println!("{} bins over {}", hist.len(), hist.domain());
//! for bin in hist.bins() {
//!     println!("  {bin}");
//! }
//! ```
//!
//! ## Weighted observations with a fixed width
//!
//! ```rust
//! use freq_histogram::{weighted_histogram, HistogramConfig};
//!
//! let values = vec![1.0, 2.0, 3.0];
//! let weights = vec![1.0, 2.0, 1.0];
//! let config = HistogramConfig::new().with_bin_width(1.0);
//! let hist = weighted_histogram(&values, &weights, &config).unwrap();
//!
//! assert_eq!(hist.summary().mean, 2.0);
//! ```
//!
//! ## Arbitrary records with accessors and tail capture
//!
//! ```rust
//! use freq_histogram::{histogram_of, HistogramConfig, WeightSource};
//!
//! struct Reading { temp: f64, samples: f64 }
//! let readings = vec![
//!     Reading { temp: 20.5, samples: 3.0 },
//!     Reading { temp: 21.0, samples: 1.0 },
//!     Reading { temp: 35.0, samples: 2.0 },
//! ];
//!
//! let weight = |r: &Reading| r.samples;
//! let config = HistogramConfig::new()
//!     .with_domain(20.0, 25.0)
//!     .with_tails(true);
//! let hist = histogram_of(
//!     &readings,
//!     |r| Some(r.temp),
//!     WeightSource::Accessor(&weight),
//!     &config,
//! )
//! .unwrap();
//!
//! // The 35.0 reading lands in the overflow slot
//! assert_eq!(hist.bins().last().unwrap().count, 2.0);
//! ```

pub mod accumulate;
pub mod build;
pub mod config;
pub mod domain;
pub mod extract;
pub mod plan;
mod pipeline;
pub mod types;

// Re-export main types
pub use config::{BinWidthRule, BinningStrategy, EdgeRule, HistogramConfig, TailCapture};
pub use domain::Domain;
pub use extract::{Observations, WeightSource};
pub use plan::{BinPlan, MAX_BIN_COUNT};
pub use types::{Bin, Histogram};

pub use freq_core::{Error, Result};

/// Compute a histogram from numeric data with unit weights.
pub fn histogram(data: &[f64], config: &HistogramConfig) -> Result<Histogram> {
    let (obs, warnings) = extract::from_values(data);
    pipeline::compute(obs, warnings, config)
}

/// Compute a histogram from paired value/weight slices.
pub fn weighted_histogram(
    values: &[f64],
    weights: &[f64],
    config: &HistogramConfig,
) -> Result<Histogram> {
    let (obs, warnings) = extract::from_weighted(values, weights)?;
    pipeline::compute(obs, warnings, config)
}

/// Compute a histogram from arbitrary records via a value accessor and a
/// weight source.
pub fn histogram_of<R>(
    records: &[R],
    value: impl Fn(&R) -> Option<f64>,
    weights: WeightSource<'_, R>,
    config: &HistogramConfig,
) -> Result<Histogram> {
    let (obs, warnings) = extract::from_records(records, value, &weights);
    pipeline::compute(obs, warnings, config)
}
