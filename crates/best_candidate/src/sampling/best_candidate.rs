//! Best-candidate (Mitchell's) point generation with a growing candidate pool.
use rand::RngCore;

use crate::sampling::{grow_point_set, CandidateSampling, Generation};

/// Best-candidate (Mitchell's) sampling over the unit square.
///
/// The point with index `k` is the most isolated of `k + 1` random candidates. Every
/// candidate is scored against every committed point, so the cost of a run is fixed by
/// `count` alone (see [`BestCandidateSampling::expected_evaluations`]).
#[derive(Debug, Clone)]
pub struct BestCandidateSampling {
    /// Number of points to generate.
    pub count: usize,
}

impl BestCandidateSampling {
    pub const LABEL: &'static str = "MBC";

    /// Create a new best-candidate sampler that generates `count` points.
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Distance evaluations of a full run: `sum over k of (k + 1) * k = n(n - 1)(n + 1) / 3`.
    ///
    /// Saturates at `u64::MAX` for counts whose cost does not fit.
    pub fn expected_evaluations(count: usize) -> u64 {
        let n = count as u128;
        if n == 0 {
            return 0;
        }
        n.checked_mul(n - 1)
            .and_then(|v| v.checked_mul(n + 1))
            .and_then(|v| u64::try_from(v / 3).ok())
            .unwrap_or(u64::MAX)
    }
}

impl CandidateSampling for BestCandidateSampling {
    fn label(&self) -> &str {
        Self::LABEL
    }

    fn count(&self) -> usize {
        self.count
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Generation {
        grow_point_set(self.count, rng, |_| None)
    }
}
