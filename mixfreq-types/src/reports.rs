//! Report envelopes produced by the orchestrator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::MixfreqError;
use crate::frequency::Frequency;
use crate::table::FrequencyPanel;

/// A series that was skipped because fetching or processing it failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesFailure {
    /// Frequency bucket the series was requested in.
    pub frequency: Frequency,
    /// Series identifier.
    pub id: String,
    /// Why the series was skipped.
    pub error: MixfreqError,
}

/// Result of a panel run: one finalized panel per requested frequency plus
/// the non-fatal per-series failures.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelReport {
    /// Finalized panels keyed by target frequency.
    pub panels: BTreeMap<Frequency, FrequencyPanel>,
    /// Series skipped during the run, in processing order.
    pub warnings: Vec<SeriesFailure>,
}

impl PanelReport {
    /// Panel for a frequency, if it was requested.
    #[must_use]
    pub fn panel(&self, frequency: Frequency) -> Option<&FrequencyPanel> {
        self.panels.get(&frequency)
    }

    /// Failures recorded for one frequency.
    pub fn failures_for(&self, frequency: Frequency) -> impl Iterator<Item = &SeriesFailure> {
        self.warnings.iter().filter(move |w| w.frequency == frequency)
    }
}
