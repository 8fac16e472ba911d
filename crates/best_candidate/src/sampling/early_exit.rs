//! Early-exit best-candidate sampling.
//!
//! Same growth schedule as [`crate::sampling::BestCandidateSampling`], but each pool
//! is scanned with the secretary-problem stopping rule: improvements seen before
//! `ceil(pool_size / e)` candidates are only remembered, and the first improvement at
//! or after that index is committed immediately.
use rand::RngCore;

use crate::sampling::{grow_point_set, CandidateSampling, Generation};

const ONE_OVER_E: f32 = 1.0 / std::f32::consts::E;

/// 0-based candidate index from which an improving candidate ends the scan of a pool.
#[inline]
pub fn early_exit_index(pool_size: usize) -> usize {
    (pool_size as f32 * ONE_OVER_E).ceil() as usize
}

/// Early-exit best-candidate sampling over the unit square.
#[derive(Debug, Clone)]
pub struct EarlyExitSampling {
    /// Number of points to generate.
    pub count: usize,
}

impl EarlyExitSampling {
    pub const LABEL: &'static str = "EBC";

    /// Create a new early-exit sampler that generates `count` points.
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl CandidateSampling for EarlyExitSampling {
    fn label(&self) -> &str {
        Self::LABEL
    }

    fn count(&self) -> usize {
        self.count
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Generation {
        grow_point_set(self.count, rng, |pool_size| {
            Some(early_exit_index(pool_size))
        })
    }
}
