//! Event types and sinks for observing trial runs.
//!
//! This module defines [`TrialEvent`] and a set of sinks to emit or collect events
//! while [`crate::trials::runner::TrialRunner`] works through its trials. Progress
//! output is built on top of these rather than printed by the runner.
use std::path::PathBuf;

use crate::trials::runner::{Comparison, VariantSummary};

/// Describes events emitted while running trials.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum TrialEvent {
    /// Emitted before the first trial of a generator variant.
    VariantStarted {
        /// Variant label, e.g. `MBC`.
        label: String,
        /// Number of trials that will run.
        trials: usize,
        /// Points generated per trial.
        points_per_trial: usize,
    },

    /// Emitted after a trial's point set was generated and persisted.
    TrialFinished {
        /// Variant label.
        label: String,
        /// 0-based trial index.
        index: usize,
        /// Total trials for this variant.
        trials: usize,
        /// Distance evaluations spent on this trial.
        distance_evaluations: u64,
        /// Where the point set image was written.
        path: PathBuf,
    },

    /// Emitted after all trials of a variant completed.
    VariantFinished {
        /// Aggregate cost for the variant.
        summary: VariantSummary,
    },

    /// Emitted once both variants completed, before post-processing starts.
    ComparisonFinished {
        /// Baseline and early-exit summaries.
        comparison: Comparison,
    },

    /// Emitted after post-processing produced a summary image for a variant.
    AnalysisFinished {
        /// Variant label.
        label: String,
        /// Summary image path.
        output: PathBuf,
    },

    /// Non-fatal warning.
    Warning {
        /// Context string (e.g. variant label).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// Receives [`TrialEvent`]s from a [`crate::trials::runner::TrialRunner`].
pub trait EventSink {
    fn send(&mut self, event: TrialEvent);
}

/// Discards every event.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: TrialEvent) {}
}

/// Forwards each event to a closure.
pub struct FnSink<F>(F);

impl<F: FnMut(TrialEvent)> FnSink<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F: FnMut(TrialEvent)> EventSink for FnSink<F> {
    #[inline]
    fn send(&mut self, event: TrialEvent) {
        (self.0)(event)
    }
}

/// Records events in arrival order.
#[derive(Debug, Default)]
pub struct VecSink {
    events: Vec<TrialEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[TrialEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of `TrialFinished` events recorded for variant `label`.
    pub fn finished_trials(&self, label: &str) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TrialEvent::TrialFinished { label: l, .. } if l == label))
            .count()
    }

    /// Summaries from every `VariantFinished` event, in completion order.
    pub fn summaries(&self) -> impl Iterator<Item = &VariantSummary> {
        self.events.iter().filter_map(|e| match e {
            TrialEvent::VariantFinished { summary } => Some(summary),
            _ => None,
        })
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: TrialEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(label: &str, index: usize) -> TrialEvent {
        TrialEvent::TrialFinished {
            label: label.into(),
            index,
            trials: 3,
            distance_evaluations: 20,
            path: PathBuf::from(format!("out/{label}_{index}.png")),
        }
    }

    #[test]
    fn vec_sink_counts_trials_per_variant() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        for event in [finished("MBC", 0), finished("MBC", 1), finished("EBC", 0)] {
            sink.send(event);
        }
        assert_eq!(sink.len(), 3);
        assert_eq!(sink.finished_trials("MBC"), 2);
        assert_eq!(sink.finished_trials("EBC"), 1);
        assert_eq!(sink.finished_trials("XYZ"), 0);
        assert_eq!(sink.summaries().count(), 0);
    }

    #[test]
    fn fn_sink_sees_trial_indices() {
        let mut indices = Vec::new();
        let mut sink = FnSink::new(|event| {
            if let TrialEvent::TrialFinished { index, .. } = event {
                indices.push(index);
            }
        });
        sink.send(finished("EBC", 4));
        sink.send(finished("EBC", 5));
        assert_eq!(indices, vec![4, 5]);
    }

    #[test]
    fn unit_sink_discards_events() {
        EventSink::send(&mut (), finished("MBC", 0));
    }
}
