//! Repeated-trial harness comparing the two candidate sampling strategies.
//!
//! Persistence of point sets and the frequency-domain post-processing step are
//! collaborators behind [`PointSetSink`] and [`SpectrumAnalysis`]; the harness only
//! decides what goes where.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use mint::Vector2;

use crate::error::Result;

pub mod config;
pub mod events;
pub mod runner;

/// Destination for the point set produced by each trial.
pub trait PointSetSink {
    fn persist(&mut self, points: &[Vector2<f32>], path: &Path) -> Result<()>;
}

/// Post-processing run once per variant over all of its persisted point sets.
///
/// Inputs are `<input_prefix><index>.png` for `index` in `0..trial_count`.
pub trait SpectrumAnalysis {
    fn analyze(&mut self, input_prefix: &Path, trial_count: usize, output: &Path) -> Result<()>;

    /// Whether [`SpectrumAnalysis::analyze`] does anything at all.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Skips post-processing.
impl SpectrumAnalysis for () {
    fn analyze(&mut self, _input_prefix: &Path, _trial_count: usize, _output: &Path) -> Result<()> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Appends `<index>.png` to a path prefix such as `out/MBC_`.
pub fn numbered_path(prefix: &Path, index: usize) -> PathBuf {
    let mut name = OsString::from(prefix.as_os_str());
    name.push(format!("{index}.png"));
    PathBuf::from(name)
}

/// Prefix shared by all per-trial images of a variant, e.g. `out/MBC_`.
pub fn trial_prefix(output_dir: &Path, label: &str) -> PathBuf {
    output_dir.join(format!("{label}_"))
}

/// Summary image written by post-processing, e.g. `out/_MBC.png`.
pub fn summary_path(output_dir: &Path, label: &str) -> PathBuf {
    output_dir.join(format!("_{label}.png"))
}
