//! Shared foundation for the freq-stats crates
//!
//! Provides the unified error type, slice utilities, and the
//! ordered-candidate fallback evaluator used by the binning planner.
//!
//! The pipeline built on top of this crate is purely synchronous and
//! single-threaded: recoverable data-quality problems are reported as warning
//! strings on the final result, while this crate's [`Error`] is reserved for
//! structural invariant violations that indicate a bug rather than bad input.

pub mod error;
pub mod fallback;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
pub use fallback::{first_positive_finite, first_valid};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
