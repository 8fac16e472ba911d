use std::path::Path;

use best_candidate::prelude::*;
use mint::Vector2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn in_unit_square(points: &[Vector2<f32>]) -> bool {
    points
        .iter()
        .all(|p| (0.0..1.0).contains(&p.x) && (0.0..1.0).contains(&p.y))
}

#[test]
fn both_generators_produce_exactly_n_points_in_the_unit_square() {
    for count in [0usize, 1, 2, 5, 33, 100] {
        let mut rng = StdRng::seed_from_u64(count as u64 + 11);
        let baseline = BestCandidateSampling::new(count).generate(&mut rng);
        let early = EarlyExitSampling::new(count).generate(&mut rng);

        assert_eq!(baseline.len(), count);
        assert_eq!(early.len(), count);
        assert!(in_unit_square(&baseline.points));
        assert!(in_unit_square(&early.points));
    }
}

#[test]
fn baseline_cost_follows_closed_form_for_every_size() {
    let mut rng = StdRng::seed_from_u64(7);
    for count in 0..=40usize {
        let generation = BestCandidateSampling::new(count).generate(&mut rng);
        let n = count as u64;
        let closed_form = if n == 0 { 0 } else { n * (n - 1) * (n + 1) / 3 };
        assert_eq!(generation.distance_evaluations, closed_form, "count {count}");
    }
}

#[test]
fn early_exit_mean_cost_is_measurably_lower() {
    const COUNT: usize = 200;
    const TRIALS: usize = 20;

    let baseline_cost = BestCandidateSampling::expected_evaluations(COUNT);
    let sampling = EarlyExitSampling::new(COUNT);
    let policy = SeedPolicy::Fixed(0x5EED);

    let mut stats = RunningStats::new();
    for trial in 0..TRIALS {
        let mut rng = policy.rng_for_trial(trial);
        let generation = sampling.generate(&mut rng);
        assert!(generation.distance_evaluations <= baseline_cost);
        stats.push(generation.distance_evaluations as f64);
    }

    // Scanning stops on average after about 2/e of each large pool.
    let ratio = stats.mean() / baseline_cost as f64;
    assert!(ratio > 0.6 && ratio < 0.9, "ratio {ratio}");
    assert!(stats.std_dev() > 0.0);
}

#[test]
fn early_exit_spreads_points_apart() {
    // Rejection keeps blue-noise spacing: no two of 64 points end up nearly coincident.
    let mut rng = StdRng::seed_from_u64(99);
    let generation = EarlyExitSampling::new(64).generate(&mut rng);
    let points: Vec<glam::Vec2> = generation.points.iter().map(|&p| p.into()).collect();

    let mut closest = f32::INFINITY;
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            closest = closest.min(distance(a, b));
        }
    }
    assert!(closest > 0.01, "closest pair {closest}");
}

struct CountingSink {
    persisted: usize,
}

impl PointSetSink for CountingSink {
    fn persist(&mut self, points: &[Vector2<f32>], path: &Path) -> Result<()> {
        assert!(path.extension().is_some_and(|ext| ext == "png"));
        assert!(!points.is_empty());
        self.persisted += 1;
        Ok(())
    }
}

#[test]
fn comparison_reports_lower_early_exit_cost() {
    let config = TrialConfig::new()
        .with_points_per_trial(120)
        .with_trials(8)
        .with_image_size(64)
        .with_seed_policy(SeedPolicy::deterministic())
        .with_output_dir("target/trials");
    let runner = TrialRunner::try_new(config).expect("valid config");
    let mut sink = CountingSink { persisted: 0 };

    let mut progress = Vec::new();
    let mut events = FnSink::new(|event| {
        if let TrialEvent::TrialFinished { label, index, .. } = event {
            progress.push((label, index));
        }
    });

    let comparison = runner
        .run_comparison(&mut sink, &mut (), &mut events)
        .expect("comparison succeeds");

    assert_eq!(sink.persisted, 16);
    assert_eq!(progress.len(), 16);
    assert_eq!(progress[0], ("MBC".to_string(), 0));
    assert_eq!(progress[15], ("EBC".to_string(), 7));

    let ratio = comparison.ratio_percent().expect("baseline did work");
    assert!(ratio < 100.0, "ratio {ratio}");
    assert_eq!(
        comparison.baseline.min_evaluations,
        BestCandidateSampling::expected_evaluations(120)
    );
}
