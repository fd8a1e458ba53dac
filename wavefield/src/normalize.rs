//! Whole-batch normalization
//!
//! A value can only be normalized against the statistics of the batch it
//! belongs to, so everything here takes and returns full slices.

use crate::error::{Error, Result};

/// How to rescale a batch of samples for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// (v - min) / (max - min), into [0, 1]
    #[default]
    MinMax,
    /// (v - mean) / stddev, using the sample standard deviation
    ZScore,
}

impl Normalization {
    pub fn apply(&self, values: &[f64]) -> Result<Vec<f64>> {
        match self {
            Normalization::MinMax => min_max(values),
            Normalization::ZScore => z_score(values),
        }
    }

    /// Like [`apply`](Self::apply), but a batch with no spread maps to zeros
    pub fn apply_or_zero(&self, values: &[f64]) -> Result<Vec<f64>> {
        match self.apply(values) {
            Err(Error::DegenerateRange(reason)) => {
                log::warn!("{:?} fallback to zeros: {}", self, reason);
                Ok(vec![0.0; values.len()])
            }
            other => other,
        }
    }
}

/// Empty batches and non-finite samples can't be normalized
fn check_batch(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(Error::EmptyBatch);
    }
    if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(Error::DegenerateRange(format!("value {v} at index {i} is not finite")));
    }
    Ok(())
}

pub fn min_max(values: &[f64]) -> Result<Vec<f64>> {
    check_batch(values)?;

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let range = max - min;
    if range == 0.0 || !range.is_finite() {
        return Err(Error::DegenerateRange(format!("min {min} == max {max}")));
    }

    log::debug!("min-max over {} values: [{}, {}]", values.len(), min, max);
    Ok(values.iter().map(|v| (v - min) / range).collect())
}

pub fn z_score(values: &[f64]) -> Result<Vec<f64>> {
    check_batch(values)?;

    let mean = mean(values);
    let stddev = sample_std_dev(values, mean);
    if stddev == 0.0 || !stddev.is_finite() {
        return Err(Error::DegenerateRange(format!(
            "standard deviation {stddev} over {} values",
            values.len()
        )));
    }

    log::debug!("z-score over {} values: mean {}, stddev {}", values.len(), mean, stddev);
    Ok(values.iter().map(|v| (v - mean) / stddev).collect())
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Unbiased (n - 1) standard deviation; NaN for fewer than two values
pub fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_spans_unit_interval() {
        let out = min_max(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(out, vec![0.0, 0.5, 1.0]);

        let out = min_max(&[-4.0, 10.0, 3.0, 0.25, 7.5]).unwrap();
        let lo = out.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = out.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(lo, 0.0);
        assert_eq!(hi, 1.0);
    }

    #[test]
    fn min_max_preserves_order() {
        let input = [0.3, -1.2, 8.0, 2.2, 2.3, -0.5];
        let out = min_max(&input).unwrap();
        for i in 0..input.len() {
            for j in 0..input.len() {
                if input[i] < input[j] {
                    assert!(out[i] < out[j]);
                }
            }
        }
    }

    #[test]
    fn constant_batch_is_degenerate() {
        assert!(matches!(min_max(&[2.0, 2.0, 2.0]), Err(Error::DegenerateRange(_))));
        assert!(matches!(z_score(&[2.0, 2.0, 2.0]), Err(Error::DegenerateRange(_))));
        assert!(matches!(z_score(&[2.0]), Err(Error::DegenerateRange(_))));
    }

    #[test]
    fn empty_batch_is_rejected() {
        assert!(matches!(min_max(&[]), Err(Error::EmptyBatch)));
        assert!(matches!(z_score(&[]), Err(Error::EmptyBatch)));
        assert!(matches!(Normalization::MinMax.apply_or_zero(&[]), Err(Error::EmptyBatch)));
    }

    #[test]
    fn fallback_substitutes_zeros() {
        let out = Normalization::MinMax.apply_or_zero(&[0.0; 4]).unwrap();
        assert_eq!(out, vec![0.0; 4]);
        let out = Normalization::ZScore.apply_or_zero(&[5.0; 3]).unwrap();
        assert_eq!(out, vec![0.0; 3]);
    }

    #[test]
    fn z_score_has_zero_mean_unit_stddev() {
        let input = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0, -3.5, 0.125];
        let out = z_score(&input).unwrap();
        let m = mean(&out);
        let s = sample_std_dev(&out, m);
        assert!(m.abs() < 1e-12);
        assert!((s - 1.0).abs() < 1e-12);
    }

    #[test]
    fn z_score_uses_sample_deviation() {
        // mean 2, sample stddev 1
        let out = z_score(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(out, vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let batch = [1.0, bad, 3.0];
            assert!(matches!(min_max(&batch), Err(Error::DegenerateRange(_))));
            assert!(matches!(z_score(&batch), Err(Error::DegenerateRange(_))));
        }
    }
}
