//! Configuration for histogram computation
//!
//! Strategy selectors are tagged enums with exhaustive matching, so every
//! branch of the planner and classifier is enforced at compile time.

/// Automatic bin-width rule family.
///
/// Each rule names the candidate tried first; candidates that come out
/// non-positive or non-finite fall through to the next rule in a fixed
/// priority order (see the planner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinWidthRule {
    /// Freedman-Diaconis: `2·IQR·n^(−1/3)`, robust to outliers
    #[default]
    FreedmanDiaconis,
    /// Scott: `3.5·σ·n^(−1/3)`
    Scott,
    /// Sturges: `range / ceil(log2(n) + 1)`
    Sturges,
}

/// How the bin width is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinningStrategy {
    /// Pick a width automatically via a statistical rule
    Auto(BinWidthRule),
    /// Use this width directly
    Width(f64),
    /// Divide the domain into this many equal bins
    Count(usize),
}

impl Default for BinningStrategy {
    fn default() -> Self {
        Self::Auto(BinWidthRule::default())
    }
}

/// Edge-inclusion policy for boundary-exact values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeRule {
    /// Bins are `[start, end)`; a value on an interior edge belongs to the
    /// bin starting there
    #[default]
    ClosedLeft,
    /// Like `ClosedLeft`, except a value on the upper domain bound is folded
    /// into the last in-range bin instead of overflowing
    ClosedRight,
}

/// Whether observations outside the domain get their own slots.
///
/// Disabled tails silently drop out-of-range observations from every bin
/// aggregate. The percent/density denominator still covers all valid
/// observations, so in-range percents can sum to less than 100 when
/// out-of-range data exists. That asymmetry is deliberate; see the
/// classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TailCapture {
    /// Capture observations below the domain in a leading slot
    pub underflow: bool,
    /// Capture observations above the domain in a trailing slot
    pub overflow: bool,
}

impl TailCapture {
    /// Capture on both sides.
    pub fn both() -> Self {
        Self {
            underflow: true,
            overflow: true,
        }
    }

    /// Capture on neither side (the default).
    pub fn none() -> Self {
        Self::default()
    }

    /// Number of extra slots this configuration adds.
    pub(crate) fn extra_slots(&self) -> usize {
        usize::from(self.underflow) + usize::from(self.overflow)
    }
}

impl From<bool> for TailCapture {
    fn from(enabled: bool) -> Self {
        Self {
            underflow: enabled,
            overflow: enabled,
        }
    }
}

/// Full configuration of one histogram computation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistogramConfig {
    /// Caller-specified domain; observed min/max when absent
    pub domain: Option<(f64, f64)>,
    /// Bin-width derivation strategy
    pub strategy: BinningStrategy,
    /// Edge-inclusion policy
    pub edge_rule: EdgeRule,
    /// Underflow/overflow slot capture
    pub tails: TailCapture,
    /// Populate the cumulative count/percent/density fields on every bin
    pub cumulative: bool,
}

impl HistogramConfig {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit domain.
    pub fn with_domain(mut self, start: f64, end: f64) -> Self {
        self.domain = Some((start, end));
        self
    }

    /// Use an automatic bin-width rule.
    pub fn with_rule(mut self, rule: BinWidthRule) -> Self {
        self.strategy = BinningStrategy::Auto(rule);
        self
    }

    /// Use a fixed bin width.
    pub fn with_bin_width(mut self, width: f64) -> Self {
        self.strategy = BinningStrategy::Width(width);
        self
    }

    /// Use a fixed bin count.
    pub fn with_bin_count(mut self, count: usize) -> Self {
        self.strategy = BinningStrategy::Count(count);
        self
    }

    /// Set the edge-inclusion policy.
    pub fn with_edge_rule(mut self, rule: EdgeRule) -> Self {
        self.edge_rule = rule;
        self
    }

    /// Set underflow/overflow capture.
    pub fn with_tails(mut self, tails: impl Into<TailCapture>) -> Self {
        self.tails = tails.into();
        self
    }

    /// Toggle the cumulative measures.
    pub fn with_cumulative(mut self, cumulative: bool) -> Self {
        self.cumulative = cumulative;
        self
    }
}
