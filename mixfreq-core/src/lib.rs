//! mixfreq-core
//!
//! Core types, traits, and the alignment engine shared across the mixfreq workspace.
//!
//! - `types`: re-exported data structures (frequencies, series, tables, config).
//! - `connector`: the `SeriesSource` trait implemented by data providers.
//! - `timeseries`: calendar grids, weekly realignment, frequency reduction and
//!   outer-join merging.
//! - `panel`: the `PanelBuilder` accumulator for one target frequency.
#![warn(missing_docs)]

/// The `SeriesSource` trait implemented by data providers.
pub mod connector;
/// Per-frequency panel accumulator.
pub mod panel;
/// Time-series utilities for aligning, reducing and merging series.
pub mod timeseries;
pub mod types;

pub use connector::SeriesSource;
pub use panel::{PanelBuilder, PanelState};
pub use timeseries::align_to_target;
pub use timeseries::calendar::{calendar_grid, horizon_end, normalize_start, period_label};
pub use timeseries::merge::outer_join;
pub use timeseries::realign::{friday_shift, realign_weekly};
pub use timeseries::reduce::{interpolate_linear, mean_by_period, reduce};
pub use types::*;
