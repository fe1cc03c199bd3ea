use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{MixfreqError, RawSeries};

/// A provider of economic time series (e.g. a statistical agency's web API).
///
/// Implementations fetch one series per call. Every call may fail; the
/// orchestrator isolates failures per series and never retries a fetch.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// A stable identifier used in logs and error messages (e.g. "fred").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Establish whatever session the source needs before the first fetch.
    ///
    /// Called once per run. The orchestrator retries a failed connect once after
    /// a short delay and aborts the run if the retry fails too.
    ///
    /// Default: no-op.
    async fn connect(&self) -> Result<(), MixfreqError> {
        Ok(())
    }

    /// Fetch the observations and descriptive fields of `id` between `start`
    /// and `end` (inclusive).
    async fn fetch(
        &self,
        id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RawSeries, MixfreqError>;
}
