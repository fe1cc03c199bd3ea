//! Mixfreq-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod frequency;
mod reports;
mod series;
mod table;

pub use config::{DATE_FORMAT, FrequencyRequest, MixfreqConfig, PanelConfig, PanelConfigBuilder};
pub use error::MixfreqError;
pub use frequency::Frequency;
pub use reports::{PanelReport, SeriesFailure};
pub use series::{Observation, RawSeries, Series, SeriesMeta};
pub use table::{DataColumn, FrequencyPanel, FrequencyTable, MetaField, MetadataColumn, MetadataTable};
