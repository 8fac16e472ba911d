//! Trial configuration and random-source seeding.
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How each generator invocation obtains its random source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeedPolicy {
    /// Seed every invocation from system entropy.
    #[default]
    Entropy,
    /// Derive every invocation's seed from a base seed and the trial index.
    Fixed(u64),
}

impl SeedPolicy {
    pub const DEFAULT_FIXED_SEED: u64 = 0x1337_b337_beef_cafe;

    /// Fixed policy using [`SeedPolicy::DEFAULT_FIXED_SEED`].
    pub fn deterministic() -> Self {
        SeedPolicy::Fixed(Self::DEFAULT_FIXED_SEED)
    }

    pub fn is_deterministic(&self) -> bool {
        matches!(self, SeedPolicy::Fixed(_))
    }

    /// Creates a fresh random source for one generator invocation.
    ///
    /// Under [`SeedPolicy::Fixed`] the same trial index always yields the same stream,
    /// so both generator variants see identical randomness for a given trial.
    pub fn rng_for_trial(&self, trial_index: usize) -> StdRng {
        match *self {
            SeedPolicy::Entropy => StdRng::seed_from_u64(rand::random()),
            SeedPolicy::Fixed(base) => StdRng::seed_from_u64(seed_for_trial(base, trial_index)),
        }
    }
}

/// Creates a deterministic seed for a trial from a base seed.
pub fn seed_for_trial(base_seed: u64, trial_index: usize) -> u64 {
    mix_u64(base_seed ^ (trial_index as u64).wrapping_mul(0x9E3779B97F4A7C15))
}

#[inline]
fn mix_u64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// Configuration for a series of trials.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrialConfig {
    /// Points generated per trial.
    pub points_per_trial: usize,
    /// Trials per generator variant.
    pub trials: usize,
    /// Edge length in pixels of the square images written per trial.
    pub image_size: u32,
    /// Seeding of the per-invocation random sources.
    pub seed_policy: SeedPolicy,
    /// Directory receiving per-trial images and summary images.
    pub output_dir: PathBuf,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            points_per_trial: 1000,
            trials: 100,
            image_size: 256,
            seed_policy: SeedPolicy::Entropy,
            output_dir: PathBuf::from("out"),
        }
    }
}

impl TrialConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of points per trial.
    pub fn with_points_per_trial(mut self, points_per_trial: usize) -> Self {
        self.points_per_trial = points_per_trial;
        self
    }

    /// Sets the number of trials per variant.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the output image size in pixels.
    pub fn with_image_size(mut self, image_size: u32) -> Self {
        self.image_size = image_size;
        self
    }

    pub fn with_seed_policy(mut self, seed_policy: SeedPolicy) -> Self {
        self.seed_policy = seed_policy;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.points_per_trial == 0 {
            return Err(Error::InvalidConfig("points_per_trial must be > 0".into()));
        }
        if self.trials == 0 {
            return Err(Error::InvalidConfig("trials must be > 0".into()));
        }
        if self.image_size == 0 {
            return Err(Error::InvalidConfig("image_size must be > 0".into()));
        }

        Ok(())
    }
}
