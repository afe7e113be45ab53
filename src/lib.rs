//! Weighted frequency distributions and summary statistics
//!
//! Umbrella crate re-exporting the freq-stats workspace:
//!
//! - [`freq_core`] — shared error type and numeric helpers
//! - [`freq_summary`] — weighted moments, quantiles, and the dataset summary
//! - [`freq_histogram`] — the histogram pipeline and its configuration
//!
//! # Example
//!
//! ```rust
//! use freq_stats::prelude::*;
//!
//! let data = vec![1.0, 2.0, 2.0, 3.0, 4.0, 6.0, 9.0, 9.0, 10.0];
//! let config = HistogramConfig::new().with_tails(true).with_cumulative(true);
//! let hist = histogram(&data, &config).unwrap();
//!
//! let total: f64 = hist.counts().iter().sum();
//! assert!((total - hist.summary().total_weight).abs() < 1e-9);
//! ```

pub use freq_core;
pub use freq_histogram;
pub use freq_summary;

/// Prelude module for convenient imports
pub mod prelude {
    pub use freq_core::{Error, Result};
    pub use freq_histogram::{
        histogram, histogram_of, weighted_histogram, Bin, BinWidthRule, BinningStrategy, Domain,
        EdgeRule, Histogram, HistogramConfig, TailCapture, WeightSource,
    };
    pub use freq_summary::WeightedSummary;
}
