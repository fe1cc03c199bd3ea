//! Re-export of foundational types from `mixfreq-types`.
// Consolidated re-exports so downstream crates can depend on `mixfreq-core` only

pub use mixfreq_types::{DATE_FORMAT, FrequencyRequest, MixfreqConfig, PanelConfig, PanelConfigBuilder};
pub use mixfreq_types::{
    DataColumn, FrequencyPanel, FrequencyTable, MetaField, MetadataColumn, MetadataTable,
};
pub use mixfreq_types::{Frequency, MixfreqError};
pub use mixfreq_types::{Observation, RawSeries, Series, SeriesMeta};
pub use mixfreq_types::{PanelReport, SeriesFailure};
