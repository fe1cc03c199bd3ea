use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use mixfreq_core::SeriesSource;
use mixfreq_types::{MixfreqConfig, MixfreqError};

/// Orchestrator that builds frequency panels from one series source.
pub struct Mixfreq {
    pub(crate) source: Arc<dyn SeriesSource>,
    pub(crate) cfg: MixfreqConfig,
    pub(crate) today: Option<NaiveDate>,
}

/// Builder for constructing a `Mixfreq` orchestrator with custom configuration.
pub struct MixfreqBuilder {
    source: Option<Arc<dyn SeriesSource>>,
    cfg: MixfreqConfig,
    today: Option<NaiveDate>,
}

impl Default for MixfreqBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MixfreqBuilder {
    /// Create a new builder with default runtime knobs.
    ///
    /// Defaults: four-year horizon past today, one connect retry after 1 s,
    /// no per-series fetch timeout, up to four concurrent fetches.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: MixfreqConfig::default(),
            today: None,
        }
    }

    /// Register the series source. A later call replaces an earlier one.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn SeriesSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace every runtime knob at once.
    #[must_use]
    pub fn config(mut self, cfg: MixfreqConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Pin "today" instead of reading the system clock at the start of each run.
    ///
    /// The end date of every grid and fetch is `today` plus the horizon.
    #[must_use]
    pub const fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Number of years past today covered by every grid (default 4).
    #[must_use]
    pub const fn horizon_years(mut self, years: u32) -> Self {
        self.cfg.horizon_years = years;
        self
    }

    /// Delay before the single connect retry (default 1 s).
    #[must_use]
    pub const fn connect_retry_delay(mut self, delay: Duration) -> Self {
        self.cfg.connect_retry_delay = delay;
        self
    }

    /// Bound every fetch; a fetch exceeding it becomes a per-series failure.
    #[must_use]
    pub const fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.fetch_timeout = Some(timeout);
        self
    }

    /// Maximum number of in-flight fetches within one frequency (default 4).
    ///
    /// `1` fetches strictly one series at a time. Merge order is the
    /// configured order regardless of this value.
    #[must_use]
    pub const fn max_concurrency(mut self, n: usize) -> Self {
        self.cfg.max_concurrency = n;
        self
    }

    /// Build the `Mixfreq` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no source has been registered via
    /// [`with_source`](Self::with_source), if `max_concurrency` is zero, or
    /// if the horizon overflows the calendar.
    pub fn build(self) -> Result<Mixfreq, MixfreqError> {
        let Some(source) = self.source else {
            return Err(MixfreqError::InvalidArg(
                "no source registered; add one via with_source(...)".to_string(),
            ));
        };
        if self.cfg.max_concurrency == 0 {
            return Err(MixfreqError::InvalidArg(
                "max_concurrency must be at least 1".to_string(),
            ));
        }
        if self.cfg.horizon_years.checked_mul(12).is_none() {
            return Err(MixfreqError::InvalidArg(format!(
                "horizon of {} years is out of range",
                self.cfg.horizon_years
            )));
        }
        Ok(Mixfreq {
            source,
            cfg: self.cfg,
            today: self.today,
        })
    }
}

/// Attribute a fetch error to `source_name` unless it already names its origin.
pub(crate) fn tag_err(source_name: &str, e: MixfreqError) -> MixfreqError {
    match e {
        e @ (MixfreqError::NotFound { .. }
        | MixfreqError::FetchTimeout { .. }
        | MixfreqError::Source { .. }
        | MixfreqError::Connection { .. }
        | MixfreqError::UnknownFrequency { .. }) => e,
        other => MixfreqError::source_error(source_name, other.to_string()),
    }
}

impl Mixfreq {
    /// Start building a new `Mixfreq` instance.
    ///
    /// ```rust,ignore
    /// let mixfreq = mixfreq::Mixfreq::builder()
    ///     .with_source(Arc::new(MockSource::new()))
    ///     .max_concurrency(8)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> MixfreqBuilder {
        MixfreqBuilder::new()
    }

    /// Runtime knobs in effect.
    #[must_use]
    pub const fn config(&self) -> &MixfreqConfig {
        &self.cfg
    }

    /// Name of the registered source.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Wrap a source future with the optional fetch timeout and standardized
    /// timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "mixfreq::core::source_call_with_timeout",
            skip(source_name, id, timeout, fut),
            fields(
                source = source_name,
                series = id,
                timeout_ms = timeout.map(|t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX)),
            ),
        )
    )]
    pub(crate) async fn source_call_with_timeout<T, Fut>(
        source_name: &'static str,
        id: &str,
        timeout: Option<Duration>,
        fut: Fut,
    ) -> Result<T, MixfreqError>
    where
        Fut: std::future::Future<Output = Result<T, MixfreqError>>,
    {
        match timeout {
            Some(t) => (tokio::time::timeout(t, fut).await)
                .unwrap_or_else(|_| Err(MixfreqError::fetch_timeout(source_name, id))),
            None => fut.await,
        }
    }
}
