//! Command-line arguments for the trial harness.
use std::path::PathBuf;

use best_candidate::prelude::{SeedPolicy, SpectrumAnalysis, TrialConfig};
use clap::{Parser, ValueEnum};

use crate::spectrum::{CommandAnalysis, ExpectedSpectrum};

pub const DEFAULT_ANALYZER_COMMAND: &str = "python MakeExpectedDFT.py";

/// Compare best-candidate sampling against its early-exit variant
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "best-candidate-trials")]
#[command(version)]
pub struct Cli {
    /// Points generated per trial
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub points: usize,

    /// Trials per variant
    #[arg(short, long, default_value_t = 100)]
    pub trials: usize,

    /// Width and height of each point set image in pixels
    #[arg(long, default_value_t = 256)]
    pub image_size: u32,

    /// Use a fixed seed so runs are reproducible
    #[arg(long)]
    pub deterministic: bool,

    /// Fixed base seed (implies --deterministic)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory receiving point set and summary images
    #[arg(short, long, default_value = "out")]
    pub out_dir: PathBuf,

    /// Post-processing applied to each variant's images
    #[arg(long, value_enum, default_value_t = Analyzer::Builtin)]
    pub analyzer: Analyzer,

    /// External command used with `--analyzer command`
    #[arg(long, default_value = DEFAULT_ANALYZER_COMMAND)]
    pub analyzer_command: String,

    /// Suppress progress and report output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Available post-processing backends
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Analyzer {
    /// Built-in averaged DFT magnitude
    Builtin,
    /// External program invoked with prefix, count and output path
    Command,
    /// Skip post-processing
    None,
}

impl Cli {
    pub fn seed_policy(&self) -> SeedPolicy {
        match (self.seed, self.deterministic) {
            (Some(seed), _) => SeedPolicy::Fixed(seed),
            (None, true) => SeedPolicy::deterministic(),
            (None, false) => SeedPolicy::Entropy,
        }
    }

    pub fn trial_config(&self) -> TrialConfig {
        TrialConfig::new()
            .with_points_per_trial(self.points)
            .with_trials(self.trials)
            .with_image_size(self.image_size)
            .with_seed_policy(self.seed_policy())
            .with_output_dir(self.out_dir.clone())
    }

    /// Builds the selected post-processing backend.
    ///
    /// Returns `None` if the external command line is blank.
    pub fn analyzer(&self) -> Option<Box<dyn SpectrumAnalysis>> {
        match self.analyzer {
            Analyzer::Builtin => Some(Box::new(ExpectedSpectrum::new())),
            Analyzer::Command => CommandAnalysis::parse(&self.analyzer_command)
                .map(|c| Box::new(c) as Box<dyn SpectrumAnalysis>),
            Analyzer::None => Some(Box::new(())),
        }
    }
}
