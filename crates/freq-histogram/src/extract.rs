//! Observation extraction
//!
//! Turns raw input into parallel value/weight sequences plus the original
//! index of every retained observation. Malformed individual items are
//! dropped, never fatal: a non-finite value, or a weight that is non-finite
//! or not strictly positive, removes the whole observation.

use freq_core::{Error, Result};

/// Parallel value/weight sequences extracted from one input.
///
/// `indices[i]` is the position of observation `i` in the original input, so
/// bin item lists can refer back to source records even after invalid entries
/// were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observations {
    /// Finite observation values
    pub values: Vec<f64>,
    /// Strictly positive, finite weights, same length as `values`
    pub weights: Vec<f64>,
    /// Original input index of each retained observation
    pub indices: Vec<usize>,
}

impl Observations {
    /// Number of retained observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing survived extraction.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            weights: Vec::with_capacity(capacity),
            indices: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, index: usize, value: f64, weight: f64) {
        self.values.push(value);
        self.weights.push(weight);
        self.indices.push(index);
    }
}

/// Where observation weights come from.
pub enum WeightSource<'a, R> {
    /// Every observation weighs 1
    Unit,
    /// Every observation weighs this much
    Constant(f64),
    /// Per-record weight accessor
    Accessor(&'a dyn Fn(&R) -> f64),
}

impl<R> WeightSource<'_, R> {
    fn resolve(&self, record: &R) -> f64 {
        match self {
            Self::Unit => 1.0,
            Self::Constant(w) => *w,
            Self::Accessor(f) => f(record),
        }
    }
}

fn valid_weight(w: f64) -> bool {
    w.is_finite() && w > 0.0
}

fn dropped_warning(dropped: usize, total: usize) -> Vec<String> {
    if dropped == 0 {
        return Vec::new();
    }
    vec![format!(
        "Ignored {dropped} of {total} observations with non-finite values or non-positive weights"
    )]
}

/// Fast path: numeric input, identity accessor, unit weights.
pub fn from_values(data: &[f64]) -> (Observations, Vec<String>) {
    let mut obs = Observations::with_capacity(data.len());
    for (i, &x) in data.iter().enumerate() {
        if x.is_finite() {
            obs.push(i, x, 1.0);
        }
    }
    let warnings = dropped_warning(data.len() - obs.len(), data.len());
    (obs, warnings)
}

/// Paired value/weight slices.
///
/// A length mismatch is a structural error: the two slices are one logical
/// sequence split in half by the caller.
pub fn from_weighted(values: &[f64], weights: &[f64]) -> Result<(Observations, Vec<String>)> {
    if values.len() != weights.len() {
        return Err(Error::size_mismatch(
            values.len(),
            weights.len(),
            "weight vector",
        ));
    }

    let mut obs = Observations::with_capacity(values.len());
    for (i, (&x, &w)) in values.iter().zip(weights).enumerate() {
        if x.is_finite() && valid_weight(w) {
            obs.push(i, x, w);
        }
    }
    let warnings = dropped_warning(values.len() - obs.len(), values.len());
    Ok((obs, warnings))
}

/// General path: arbitrary records with a value accessor and a weight source.
///
/// Records whose accessor returns `None` or a non-finite value are skipped;
/// so are records whose resolved weight is invalid. The observation is
/// dropped, not zeroed, so it contributes to no downstream aggregate.
pub fn from_records<R>(
    records: &[R],
    value: impl Fn(&R) -> Option<f64>,
    weights: &WeightSource<'_, R>,
) -> (Observations, Vec<String>) {
    let mut obs = Observations::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let x = match value(record) {
            Some(x) if x.is_finite() => x,
            _ => continue,
        };
        let w = weights.resolve(record);
        if valid_weight(w) {
            obs.push(i, x, w);
        }
    }
    let warnings = dropped_warning(records.len() - obs.len(), records.len());
    (obs, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_passthrough() {
        let (obs, warnings) = from_values(&[1.0, 2.0, 3.0]);
        assert_eq!(obs.values, vec![1.0, 2.0, 3.0]);
        assert_eq!(obs.weights, vec![1.0, 1.0, 1.0]);
        assert_eq!(obs.indices, vec![0, 1, 2]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_from_values_drops_non_finite() {
        let (obs, warnings) = from_values(&[1.0, f64::NAN, 3.0, f64::INFINITY]);
        assert_eq!(obs.values, vec![1.0, 3.0]);
        assert_eq!(obs.indices, vec![0, 2]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Ignored 2 of 4"));
    }

    #[test]
    fn test_from_weighted_drops_bad_weights() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let weights = [1.0, 0.0, -2.0, f64::NAN, 2.0];
        let (obs, warnings) = from_weighted(&values, &weights).unwrap();

        // Non-positive and non-finite weights drop the whole observation
        assert_eq!(obs.values, vec![1.0, 5.0]);
        assert_eq!(obs.weights, vec![1.0, 2.0]);
        assert_eq!(obs.indices, vec![0, 4]);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_from_weighted_length_mismatch() {
        assert!(from_weighted(&[1.0, 2.0], &[1.0]).is_err());
    }

    #[test]
    fn test_from_records_with_accessor() {
        struct Reading {
            temp: Option<f64>,
            samples: f64,
        }
        let records = [
            Reading {
                temp: Some(20.0),
                samples: 3.0,
            },
            Reading {
                temp: None,
                samples: 1.0,
            },
            Reading {
                temp: Some(25.0),
                samples: 0.0,
            },
            Reading {
                temp: Some(22.0),
                samples: 2.0,
            },
        ];

        let weight = |r: &Reading| r.samples;
        let (obs, warnings) = from_records(
            &records,
            |r| r.temp,
            &WeightSource::Accessor(&weight),
        );

        assert_eq!(obs.values, vec![20.0, 22.0]);
        assert_eq!(obs.weights, vec![3.0, 2.0]);
        assert_eq!(obs.indices, vec![0, 3]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Ignored 2 of 4"));
    }

    #[test]
    fn test_from_records_constant_weight() {
        let records = [1.0_f64, 2.0, 3.0];
        let (obs, warnings) =
            from_records(&records, |&r| Some(r), &WeightSource::Constant(0.5));
        assert_eq!(obs.weights, vec![0.5, 0.5, 0.5]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_from_records_invalid_constant_drops_everything() {
        let records = [1.0_f64, 2.0];
        let (obs, warnings) =
            from_records(&records, |&r| Some(r), &WeightSource::Constant(-1.0));
        assert!(obs.is_empty());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let (obs, warnings) = from_values(&[]);
        assert!(obs.is_empty());
        assert!(warnings.is_empty());
    }
}
