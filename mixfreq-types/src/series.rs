//! Series as delivered by a source and as consumed by the alignment engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::MixfreqError;
use crate::frequency::Frequency;

/// A single dated value. `None` marks a missing observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date.
    pub date: NaiveDate,
    /// Observed value, if any.
    pub value: Option<f64>,
}

impl Observation {
    /// Build an observation from a raw float; NaN and infinities become missing.
    #[must_use]
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            value: value.is_finite().then_some(value),
        }
    }

    /// Build a missing observation.
    #[must_use]
    pub const fn missing(date: NaiveDate) -> Self {
        Self { date, value: None }
    }

    /// Returns true if the value is missing.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}

/// Descriptive fields recorded in the metadata table for every merged series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesMeta {
    /// Human-readable title.
    pub title: String,
    /// Units of measure.
    pub units: String,
    /// Seasonal adjustment label (e.g. "Seasonally Adjusted Annual Rate").
    pub seasonal_adjustment: String,
    /// Publishing source.
    pub source: String,
}

/// Per-series record as returned by a series source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    /// Series identifier.
    pub id: String,
    /// Native frequency label; qualifiers after the first comma are ignored.
    pub frequency_label: String,
    /// Observations in ascending date order.
    pub observations: Vec<Observation>,
    /// Descriptive fields.
    pub meta: SeriesMeta,
}

/// A fetched series with its native frequency resolved. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    id: String,
    native: Frequency,
    observations: Vec<Observation>,
    meta: SeriesMeta,
}

impl Series {
    /// Build a series from parts. Non-finite values are stored as missing.
    ///
    /// # Errors
    /// Returns `Data` if the observation dates are not strictly increasing.
    pub fn new(
        id: impl Into<String>,
        native: Frequency,
        observations: Vec<Observation>,
        meta: SeriesMeta,
    ) -> Result<Self, MixfreqError> {
        let id = id.into();
        let mut observations = observations;
        for o in &mut observations {
            o.value = o.value.filter(|v| v.is_finite());
        }
        if let Some(w) = observations.windows(2).find(|w| w[0].date >= w[1].date) {
            return Err(MixfreqError::Data(format!(
                "series {id}: dates not strictly increasing at {}",
                w[1].date
            )));
        }
        Ok(Self {
            id,
            native,
            observations,
            meta,
        })
    }

    /// Series identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Native sampling frequency.
    #[must_use]
    pub const fn native(&self) -> Frequency {
        self.native
    }

    /// Observations in ascending date order.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Descriptive fields.
    #[must_use]
    pub const fn meta(&self) -> &SeriesMeta {
        &self.meta
    }

    /// Split into observations and metadata.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Observation>, SeriesMeta) {
        (self.observations, self.meta)
    }
}

impl TryFrom<RawSeries> for Series {
    type Error = MixfreqError;

    fn try_from(raw: RawSeries) -> Result<Self, Self::Error> {
        let native = Frequency::from_native_label(&raw.frequency_label)?;
        Self::new(raw.id, native, raw.observations, raw.meta)
    }
}
