//! High-level runner for executing generator variants over repeated trials.
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::sampling::{BestCandidateSampling, CandidateSampling, EarlyExitSampling};
use crate::stats::RunningStats;
use crate::trials::config::TrialConfig;
use crate::trials::events::{EventSink, TrialEvent};
use crate::trials::{numbered_path, summary_path, trial_prefix, PointSetSink, SpectrumAnalysis};

/// Aggregate cost of all trials of one generator variant.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariantSummary {
    /// Variant label, e.g. `MBC`.
    pub label: String,
    /// Number of completed trials.
    pub trials: usize,
    /// Points generated per trial.
    pub points_per_trial: usize,
    /// Mean distance evaluations per trial.
    pub mean_evaluations: f64,
    /// Population standard deviation of distance evaluations per trial.
    pub std_dev_evaluations: f64,
    /// Cheapest trial.
    pub min_evaluations: u64,
    /// Most expensive trial.
    pub max_evaluations: u64,
    /// Wall-clock time for generating and persisting all trials.
    pub elapsed: Duration,
}

impl VariantSummary {
    fn from_stats(
        label: &str,
        points_per_trial: usize,
        stats: &RunningStats,
        elapsed: Duration,
    ) -> Self {
        Self {
            label: label.to_owned(),
            trials: stats.count() as usize,
            points_per_trial,
            mean_evaluations: stats.mean(),
            std_dev_evaluations: stats.std_dev(),
            min_evaluations: stats.min().unwrap_or(0.0) as u64,
            max_evaluations: stats.max().unwrap_or(0.0) as u64,
            elapsed,
        }
    }
}

/// Baseline and early-exit summaries side by side.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Comparison {
    pub baseline: VariantSummary,
    pub early_exit: VariantSummary,
}

impl Comparison {
    pub fn new(baseline: VariantSummary, early_exit: VariantSummary) -> Self {
        Self {
            baseline,
            early_exit,
        }
    }

    /// Early-exit mean cost as a percentage of the baseline mean cost.
    ///
    /// `None` when the baseline did no work (one point per trial).
    pub fn ratio_percent(&self) -> Option<f64> {
        if self.baseline.mean_evaluations <= 0.0 {
            return None;
        }
        Some(100.0 * self.early_exit.mean_evaluations / self.baseline.mean_evaluations)
    }
}

pub struct TrialRunner {
    /// Validated configuration applied to every variant.
    pub config: TrialConfig,
}

impl TrialRunner {
    pub fn try_new(config: TrialConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Runs `config.trials` invocations of `sampling`, persisting each point set.
    ///
    /// The first persistence failure aborts the variant; the remaining trials would
    /// produce an incomplete image series.
    pub fn run_variant(
        &self,
        sampling: &dyn CandidateSampling,
        sink: &mut dyn PointSetSink,
        events: &mut dyn EventSink,
    ) -> Result<VariantSummary> {
        let label = sampling.label();
        let trials = self.config.trials;
        let prefix = trial_prefix(&self.config.output_dir, label);

        events.send(TrialEvent::VariantStarted {
            label: label.to_owned(),
            trials,
            points_per_trial: sampling.count(),
        });

        let mut stats = RunningStats::new();
        let start = Instant::now();

        for index in 0..trials {
            let mut rng = self.config.seed_policy.rng_for_trial(index);
            let generation = sampling.generate(&mut rng);

            let path = numbered_path(&prefix, index);
            sink.persist(&generation.points, &path).inspect_err(|e| {
                warn!("Variant '{}' aborted at trial {}: {}.", label, index, e);
            })?;

            stats.push(generation.distance_evaluations as f64);
            debug!(
                variant = label,
                trial = index,
                evaluations = generation.distance_evaluations,
                "trial finished"
            );

            events.send(TrialEvent::TrialFinished {
                label: label.to_owned(),
                index,
                trials,
                distance_evaluations: generation.distance_evaluations,
                path,
            });
        }

        let summary = VariantSummary::from_stats(label, sampling.count(), &stats, start.elapsed());
        info!(
            "Variant '{}': {} trials | mean evaluations {:.0} (std. dev. {:.3}) | {:.4}s.",
            summary.label,
            summary.trials,
            summary.mean_evaluations,
            summary.std_dev_evaluations,
            summary.elapsed.as_secs_f64(),
        );

        events.send(TrialEvent::VariantFinished {
            summary: summary.clone(),
        });

        Ok(summary)
    }

    /// Runs post-processing over the persisted images of variant `label`.
    ///
    /// Returns the summary image path, or `None` when `analysis` is disabled.
    pub fn analyze_variant(
        &self,
        label: &str,
        analysis: &mut dyn SpectrumAnalysis,
        events: &mut dyn EventSink,
    ) -> Result<Option<PathBuf>> {
        if !analysis.is_enabled() {
            debug!("Post-processing disabled; skipping '{}'.", label);
            return Ok(None);
        }

        let prefix = trial_prefix(&self.config.output_dir, label);
        let output = summary_path(&self.config.output_dir, label);
        analysis.analyze(&prefix, self.config.trials, &output)?;

        info!("Variant '{}': summary image {}.", label, output.display());
        events.send(TrialEvent::AnalysisFinished {
            label: label.to_owned(),
            output: output.clone(),
        });

        Ok(Some(output))
    }

    /// Runs the baseline and the early-exit variant, then post-processes both.
    pub fn run_comparison(
        &self,
        sink: &mut dyn PointSetSink,
        analysis: &mut dyn SpectrumAnalysis,
        events: &mut dyn EventSink,
    ) -> Result<Comparison> {
        let count = self.config.points_per_trial;
        let baseline_sampling = BestCandidateSampling::new(count);
        let early_exit_sampling = EarlyExitSampling::new(count);

        let baseline = self.run_variant(&baseline_sampling, sink, events)?;
        let early_exit = self.run_variant(&early_exit_sampling, sink, events)?;
        let comparison = Comparison::new(baseline, early_exit);

        match comparison.ratio_percent() {
            Some(ratio) => info!("Early-exit evaluations: {:.2}% of baseline.", ratio),
            None => {
                warn!("Baseline performed no distance evaluations; ratio undefined.");
                events.send(TrialEvent::Warning {
                    context: "comparison".into(),
                    message: "baseline performed no distance evaluations".into(),
                });
            }
        }

        events.send(TrialEvent::ComparisonFinished {
            comparison: comparison.clone(),
        });

        self.analyze_variant(baseline_sampling.label(), analysis, events)?;
        self.analyze_variant(early_exit_sampling.label(), analysis, events)?;

        Ok(comparison)
    }
}
