//! Candidate-based point generation over the unit square.
//!
//! Both strategies grow a point set one point at a time. For the point with index `k`
//! they draw a pool of `k + 1` random candidates, score each candidate by its distance
//! to the nearest committed point, and commit the best one. They differ only in when
//! they stop scanning a pool.
use glam::Vec2;
use mint::Vector2;
use rand::RngCore;

pub mod best_candidate;
pub mod early_exit;

pub use best_candidate::BestCandidateSampling;
pub use early_exit::EarlyExitSampling;

/// Points produced by one generator invocation together with its cost.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generation {
    /// Committed points in generation order. Every coordinate lies in `[0, 1)`.
    pub points: Vec<Vector2<f32>>,
    /// Number of candidate-to-point distance evaluations performed.
    pub distance_evaluations: u64,
}

impl Generation {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Trait for candidate-based point set generation.
pub trait CandidateSampling: Send + Sync {
    /// Short label used in reports and output file names.
    fn label(&self) -> &str;

    /// Number of points each invocation produces.
    fn count(&self) -> usize;

    fn generate(&self, rng: &mut dyn RngCore) -> Generation;
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Generate a random float in the range [0, 1).
///
/// Uses the top 24 bits of a `u32` so the result is exactly representable and never
/// rounds up to `1.0`.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    const SCALE: f32 = 1.0 / (1u32 << 24) as f32;
    (rng.next_u32() >> 8) as f32 * SCALE
}

/// Distance from `candidate` to the closest point in `committed`.
///
/// Returns `f32::INFINITY` when nothing has been committed yet, so the first
/// candidate of the first pool is accepted vacuously.
#[inline]
pub(crate) fn isolation_score(candidate: Vec2, committed: &[Vec2]) -> f32 {
    let mut score = f32::INFINITY;
    for &point in committed {
        score = score.min(distance(candidate, point));
    }
    score
}

/// Shared growth loop for both strategies.
///
/// `exit_index` maps a pool size to the 0-based candidate index from which an improving
/// candidate ends the scan of that pool; `None` scans every candidate.
pub(crate) fn grow_point_set(
    count: usize,
    rng: &mut dyn RngCore,
    exit_index: impl Fn(usize) -> Option<usize>,
) -> Generation {
    let mut points: Vec<Vec2> = Vec::with_capacity(count);
    let mut distance_evaluations = 0u64;

    for new_index in 0..count {
        let pool_size = new_index + 1;
        let exit_at = exit_index(pool_size);

        // Any score beats NEG_INFINITY, so the first candidate is always taken.
        let mut best_candidate = Vec2::ZERO;
        let mut best_score = f32::NEG_INFINITY;

        for candidate_index in 0..pool_size {
            let x = rand01(rng);
            let y = rand01(rng);
            let candidate = Vec2::new(x, y);

            let score = isolation_score(candidate, &points);
            distance_evaluations += points.len() as u64;

            // Strictly greater: ties keep the earlier candidate.
            if score > best_score {
                best_score = score;
                best_candidate = candidate;

                if exit_at.is_some_and(|cutoff| candidate_index >= cutoff) {
                    break;
                }
            }
        }

        points.push(best_candidate);
    }

    Generation {
        points: points.into_iter().map(Into::into).collect(),
        distance_evaluations,
    }
}
