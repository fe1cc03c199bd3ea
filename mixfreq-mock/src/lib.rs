//! Deterministic series sources for tests and examples.
//!
//! - [`MockSource`] serves a fixed catalog of fixture series.
//! - [`DynamicMockSource`] defers every call to a [`DynamicMockController`]
//!   so tests can script failures, hangs and connect errors.
use async_trait::async_trait;
use chrono::NaiveDate;
use mixfreq_core::{MixfreqError, RawSeries, SeriesSource};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, FetchRequest, MockBehavior};

/// Mock source for CI-safe examples. Provides deterministic data from static fixtures.
///
/// Catalog: `INDPRO` (monthly), `GDP` (quarterly), `ICSA` (weekly, Saturdays),
/// `DFF` (daily), `POP` (annual), `UNRATE` (monthly with gaps) and
/// `BIWEEKLY` (unrecognized native frequency). The identifier `FAIL` always
/// errors and `SLOW` answers like `INDPRO` after a 200 ms delay.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_delay(id: &str) -> Result<(), MixfreqError> {
        match id {
            "FAIL" => Err(MixfreqError::source_error(
                "mixfreq-mock",
                format!("forced failure: {id}"),
            )),
            "SLOW" => {
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// Keep only observations dated within `[start, end]`.
fn window(mut series: RawSeries, start: NaiveDate, end: NaiveDate) -> RawSeries {
    series
        .observations
        .retain(|o| o.date >= start && o.date <= end);
    series
}

#[async_trait]
impl SeriesSource for MockSource {
    fn name(&self) -> &'static str {
        "mixfreq-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn fetch(
        &self,
        id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RawSeries, MixfreqError> {
        Self::maybe_fail_or_delay(id).await?;
        let lookup = if id == "SLOW" { "INDPRO" } else { id };
        let mut series = fixtures::series::by_id(lookup)
            .ok_or_else(|| MixfreqError::not_found(format!("series {id}")))?;
        series.id = id.to_string();
        Ok(window(series, start, end))
    }
}
