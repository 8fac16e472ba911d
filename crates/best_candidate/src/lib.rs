#![forbid(unsafe_code)]
//! best_candidate: Mitchell's best-candidate sampling and an early-exit variant, with the
//! cost accounting needed to compare them.
//!
//! Modules:
//! - sampling: the two generators, the distance metric and the shared growth loop
//! - stats: lerp-based running mean and variance of per-trial cost
//! - trials: configuration, seeding, events and the repeated-trial runner
//!
//! Image output and frequency-domain post-processing live behind the
//! [`trials::PointSetSink`] and [`trials::SpectrumAnalysis`] traits.
pub mod error;
pub mod sampling;
pub mod stats;
pub mod trials;

/// Convenient re-exports for common types. Import with `use best_candidate::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::sampling::early_exit::early_exit_index;
    pub use crate::sampling::{
        distance, BestCandidateSampling, CandidateSampling, EarlyExitSampling, Generation,
    };
    pub use crate::stats::{lerp, RunningStats};
    pub use crate::trials::config::{seed_for_trial, SeedPolicy, TrialConfig};
    pub use crate::trials::events::{EventSink, FnSink, TrialEvent, VecSink};
    pub use crate::trials::runner::{Comparison, TrialRunner, VariantSummary};
    pub use crate::trials::{
        numbered_path, summary_path, trial_prefix, PointSetSink, SpectrumAnalysis,
    };
}
