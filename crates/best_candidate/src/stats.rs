//! Online statistics over per-trial distance evaluation counts.
//!
//! [`RunningStats`] keeps a running mean and mean of squares, updated with
//! [`lerp`] so no per-trial history is retained.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunningStats {
    count: u64,
    mean: f64,
    mean_sq: f64,
    min: f64,
    max: f64,
}

impl Default for RunningStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningStats {
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            mean_sq: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Folds one observation into the running moments.
    pub fn push(&mut self, value: f64) {
        let t = 1.0 / (self.count + 1) as f64;
        self.mean = lerp(self.mean, value, t);
        self.mean_sq = lerp(self.mean_sq, value * value, t);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.count += 1;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn mean_of_squares(&self) -> f64 {
        self.mean_sq
    }

    /// Population variance, `E[v^2] - E[v]^2`, clamped at zero.
    pub fn variance(&self) -> f64 {
        let variance = self.mean_sq - self.mean * self.mean;
        if variance < 0.0 {
            debug!(variance, "clamping negative variance from cancellation");
            return 0.0;
        }
        variance
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }
}

impl Extend<f64> for RunningStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<f64> for RunningStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch_mean_and_variance(values: &[f64]) -> (f64, f64) {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
        (mean, variance)
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    }

    #[test]
    fn empty_stats_are_zero() {
        let stats = RunningStats::new();
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.mean(), 0.0);
        assert_eq!(stats.std_dev(), 0.0);
        assert_eq!(stats.min(), None);
        assert_eq!(stats.max(), None);
    }

    #[test]
    fn incremental_matches_batch_computation() {
        let values = [
            3.0, 7.0, 7.0, 19.0, 24.0, 1.0, 0.0, 12.0, 250_000.0, 248_731.0, 251_902.0,
        ];
        let stats: RunningStats = values.iter().copied().collect();
        let (mean, variance) = batch_mean_and_variance(&values);

        assert_eq!(stats.count(), values.len() as u64);
        assert!((stats.mean() - mean).abs() <= 1e-9 * mean.abs());
        assert!((stats.variance() - variance).abs() <= 1e-9 * variance);
        assert!((stats.std_dev() - variance.sqrt()).abs() <= 1e-6 * variance.sqrt());
        assert_eq!(stats.min(), Some(0.0));
        assert_eq!(stats.max(), Some(251_902.0));
    }

    #[test]
    fn constant_sequence_never_yields_nan() {
        let mut stats = RunningStats::new();
        for _ in 0..100 {
            stats.push(333_333_000.0);
        }
        let std_dev = stats.std_dev();
        assert!(!std_dev.is_nan());
        assert!(std_dev < 1e-6 * 333_333_000.0);
        assert!((stats.mean() - 333_333_000.0).abs() < 1e-3);
    }

    #[test]
    fn negative_variance_is_clamped() {
        let stats = RunningStats {
            count: 2,
            mean: 10.0,
            mean_sq: 99.999_999,
            min: 10.0,
            max: 10.0,
        };
        assert_eq!(stats.variance(), 0.0);
        assert_eq!(stats.std_dev(), 0.0);
    }
}
