//! Console rendering of trial events.
use std::io::{self, Write};

use best_candidate::prelude::TrialEvent;

/// Turns [`TrialEvent`]s into the console report printed by the binary.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReport {
    pub analysis_enabled: bool,
}

impl ConsoleReport {
    pub fn new(analysis_enabled: bool) -> Self {
        Self { analysis_enabled }
    }

    /// Text to print for `event`, or `None` if the event is not reported.
    ///
    /// Progress lines start with `\r` and carry no newline so they overwrite each other.
    pub fn render(&self, event: &TrialEvent) -> Option<String> {
        match event {
            TrialEvent::TrialFinished {
                label,
                index,
                trials,
                ..
            } => Some(format!("\r{label}: {}%", (index + 1) * 100 / (*trials).max(1))),
            TrialEvent::VariantFinished { summary } => Some(format!(
                "\nhotLoops = {:.0} (std. dev. {:.6})\nGenerated in {:.4} seconds\n",
                summary.mean_evaluations,
                summary.std_dev_evaluations,
                summary.elapsed.as_secs_f64()
            )),
            TrialEvent::ComparisonFinished { comparison } => {
                let mut out = match comparison.ratio_percent() {
                    Some(ratio) => format!("{} hotloops: {ratio:.2}%\n", comparison.early_exit.label),
                    None => String::new(),
                };
                if self.analysis_enabled {
                    out.push_str("making DFTs...\n");
                }
                (!out.is_empty()).then_some(out)
            }
            TrialEvent::AnalysisFinished { label, output } => {
                Some(format!("{label} spectrum: {}\n", output.display()))
            }
            _ => None,
        }
    }

    /// Writes the rendering of `event` to `out` and flushes it.
    pub fn emit(&self, event: &TrialEvent, out: &mut impl Write) -> io::Result<()> {
        match self.render(event) {
            Some(text) => {
                out.write_all(text.as_bytes())?;
                out.flush()
            }
            None => Ok(()),
        }
    }
}
