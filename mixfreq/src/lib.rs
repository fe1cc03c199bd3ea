//! Mixfreq builds mixed-frequency panels of economic time series.
//!
//! Overview
//! - Fetches every configured series from a [`SeriesSource`] (one call per
//!   series and target frequency).
//! - Brings each series onto its target frequency: weekly series are moved to
//!   Fridays, finer series are interpolated and averaged per period.
//! - Outer-joins the aligned series into one table per frequency, in
//!   configuration order, next to a metadata table with the same columns.
//! - Finalizes every table (quarterly rows dated on the third month, annual
//!   rows on July 1st, trailing all-missing rows removed).
//!
//! Key behaviors and trade-offs
//! - A failing series never aborts the run: it is left out of both tables and
//!   reported in [`PanelReport::warnings`].
//! - The last period of a reduced series is dropped unless the sample covers
//!   it completely; a partial first period is averaged from what exists.
//! - Connection setup is retried once; a second failure is fatal.
//! - Fetches run concurrently up to `max_concurrency` per frequency, but merge
//!   order always follows the configuration, so output is reproducible.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use mixfreq::{Frequency, Mixfreq, PanelConfig};
//!
//! let config = PanelConfig::builder()
//!     .frequency(Frequency::Monthly, ["INDPRO", "UNRATE"])
//!     .frequency(Frequency::Quarterly, ["GDP", "INDPRO"])
//!     .start_date("2000-01-01")
//!     .build()?;
//!
//! let mixfreq = Mixfreq::builder()
//!     .with_source(Arc::new(FredSource::new(api_key)))
//!     .fetch_timeout(std::time::Duration::from_secs(30))
//!     .build()?;
//!
//! let report = mixfreq.run(&config).await?;
//! if let Some(q) = report.panel(Frequency::Quarterly) {
//!     // q.data: index + one column per series, q.meta: title/units/...
//! }
//! for w in &report.warnings {
//!     eprintln!("{} {}: {}", w.frequency, w.id, w.error);
//! }
//! ```
//!
//! See `mixfreq/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod pipeline;

pub use core::{Mixfreq, MixfreqBuilder};

// Re-export core types for convenience
pub use mixfreq_core::{
    DATE_FORMAT, DataColumn, Frequency, FrequencyPanel, FrequencyRequest, FrequencyTable,
    MetaField, MetadataColumn, MetadataTable, MixfreqConfig, MixfreqError, Observation,
    PanelBuilder, PanelConfig, PanelConfigBuilder, PanelReport, RawSeries, Series, SeriesFailure,
    SeriesMeta, SeriesSource,
};
