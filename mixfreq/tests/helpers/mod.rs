#![allow(dead_code)]

// Re-export helpers so tests can `use crate::helpers::*;`
pub mod table_source;

pub use table_source::TableSource;

use std::sync::Arc;

use chrono::{Months, NaiveDate};
use mixfreq::{Mixfreq, MixfreqBuilder, Observation, RawSeries, SeriesMeta, SeriesSource};

// ---------- Lightweight fixtures and helpers for tests ----------

/// Calendar date from components for readability in tests.
pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("invalid date")
}

/// Fixed "today" so grids end on 2030-10-18.
pub fn today() -> NaiveDate {
    d(2026, 10, 18)
}

/// Descriptive fields whose title is the identifier.
pub fn meta(id: &str) -> SeriesMeta {
    SeriesMeta {
        title: id.to_string(),
        units: "Index".to_string(),
        seasonal_adjustment: "Seasonally Adjusted".to_string(),
        source: "Test Office".to_string(),
    }
}

/// Monthly observations starting at `start`, one per value.
pub fn monthly_obs(start: NaiveDate, values: &[f64]) -> Vec<Observation> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let date = start
                .checked_add_months(Months::new(u32::try_from(i).unwrap()))
                .unwrap();
            Observation::new(date, *v)
        })
        .collect()
}

/// A raw series as a source would return it.
pub fn raw(id: &str, label: &str, observations: Vec<Observation>) -> RawSeries {
    RawSeries {
        id: id.to_string(),
        frequency_label: label.to_string(),
        observations,
        meta: meta(id),
    }
}

/// Builder with "today" pinned.
pub fn builder_with(source: Arc<dyn SeriesSource>) -> MixfreqBuilder {
    Mixfreq::builder().with_source(source).today(today())
}

/// Orchestrator with "today" pinned and default knobs.
pub fn mixfreq_with(source: Arc<dyn SeriesSource>) -> Mixfreq {
    builder_with(source).build().expect("valid builder")
}

/// Data column identifiers of a finalized table, in order.
pub fn data_ids(panel: &mixfreq::FrequencyPanel) -> Vec<&str> {
    panel.data.column_ids().collect()
}

/// Metadata column identifiers of a finalized table, in order.
pub fn meta_ids(panel: &mixfreq::FrequencyPanel) -> Vec<&str> {
    panel.meta.column_ids().collect()
}
