use std::time::Duration;

use best_candidate::sampling::BestCandidateSampling;
use criterion::{Criterion, Throughput};

pub const SAMPLE_SIZE: usize = 10;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(3);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

#[allow(dead_code)]
pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Throughput in baseline distance evaluations, so both generators report against the
/// same amount of nominal work.
#[allow(dead_code)]
pub fn baseline_evaluations_throughput(count: usize) -> Throughput {
    Throughput::Elements(BestCandidateSampling::expected_evaluations(count).max(1))
}
