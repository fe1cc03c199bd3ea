use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use mixfreq_core::{PanelBuilder, align_to_target, horizon_end, normalize_start};
use mixfreq_types::{
    Frequency, FrequencyPanel, FrequencyRequest, MixfreqError, Observation, PanelConfig,
    PanelReport, Series, SeriesFailure, SeriesMeta,
};

use crate::Mixfreq;

impl Mixfreq {
    /// Build one finalized panel per configured frequency.
    ///
    /// Behavior:
    /// - Connects the source first (one retry); a failed connect aborts the run.
    /// - Computes the end date once: today plus the configured horizon.
    /// - Processes frequencies in configuration order and, within a frequency,
    ///   merges series in configuration order.
    /// - Per-series failures (fetch error, timeout, unrecognized native
    ///   frequency, duplicate identifier) are recorded in
    ///   [`PanelReport::warnings`]; the series is left out of both tables.
    ///
    /// # Errors
    /// Returns `Connection` if the source cannot be connected, `InvalidArg` if
    /// the end date falls off the calendar, or `Data` if a finalized table
    /// breaks its index invariant.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "mixfreq::pipeline::run",
            skip(self, config),
            fields(source = self.source.name(), frequencies = config.requests().len()),
        )
    )]
    pub async fn run(&self, config: &PanelConfig) -> Result<PanelReport, MixfreqError> {
        #[cfg(feature = "tracing")]
        for section in config.ignored_sections() {
            tracing::warn!(section = %section, "ignoring unrecognized frequency section");
        }

        self.connect_with_retry().await?;
        let end = self.end_date()?;

        let mut report = PanelReport::default();
        for request in config.requests() {
            let (panel, failures) = self.build_frequency(request, end).await?;
            report.panels.insert(request.frequency, panel);
            report.warnings.extend(failures);
        }
        Ok(report)
    }

    /// Last date of every grid and fetch window for a run started now.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the horizon pushes the date past the calendar.
    pub fn end_date(&self) -> Result<NaiveDate, MixfreqError> {
        let today = self.today.unwrap_or_else(|| chrono::Utc::now().date_naive());
        horizon_end(today, self.cfg.horizon_years).ok_or_else(|| {
            MixfreqError::InvalidArg(format!(
                "{today} plus {} years is out of range",
                self.cfg.horizon_years
            ))
        })
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "mixfreq::pipeline::build_frequency",
            skip(self, request),
            fields(frequency = %request.frequency, start = %request.start, series = request.series.len()),
        )
    )]
    async fn build_frequency(
        &self,
        request: &FrequencyRequest,
        end: NaiveDate,
    ) -> Result<(FrequencyPanel, Vec<SeriesFailure>), MixfreqError> {
        let frequency = request.frequency;
        let start = normalize_start(request.start, frequency);
        let mut builder = PanelBuilder::new(frequency, start, end);
        let mut failures: Vec<SeriesFailure> = Vec::new();

        // `buffered` yields in input order, so merges follow the configuration.
        let mut fetched = std::pin::pin!(
            stream::iter(request.series.iter())
                .map(|id| async move { (id, self.fetch_aligned(id, frequency, start, end).await) })
                .buffered(self.cfg.max_concurrency)
        );

        while let Some((id, outcome)) = fetched.next().await {
            let merged = outcome.and_then(|(observations, meta)| {
                builder.add_column(id, &observations, meta)
            });
            match merged {
                Ok(()) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(frequency = %frequency, series = %id, rows = builder.table().len(), "merged series");
                }
                Err(error) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(frequency = %frequency, series = %id, error = %error, "skipping series");
                    failures.push(SeriesFailure {
                        frequency,
                        id: id.clone(),
                        error,
                    });
                }
            }
        }

        Ok((builder.finalize()?, failures))
    }

    /// Fetch one series and bring it onto `target`.
    async fn fetch_aligned(
        &self,
        id: &str,
        target: Frequency,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<(Vec<Observation>, SeriesMeta), MixfreqError> {
        let name = self.source.name();
        let raw = Self::source_call_with_timeout(
            name,
            id,
            self.cfg.fetch_timeout,
            self.source.fetch(id, start, end),
        )
        .await
        .map_err(|e| crate::core::tag_err(name, e))?;
        let series = Series::try_from(raw)?;
        let aligned = align_to_target(&series, target);
        let (_, meta) = series.into_parts();
        Ok((aligned, meta))
    }
}
