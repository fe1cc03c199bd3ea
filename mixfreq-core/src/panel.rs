//! Accumulator that owns one frequency's data and metadata tables.

use chrono::NaiveDate;

use crate::timeseries::calendar::{calendar_grid, normalize_start, shift_to_anchor};
use crate::timeseries::{align_to_target, merge::outer_join};
use crate::{
    DataColumn, Frequency, FrequencyPanel, FrequencyTable, MetadataTable, MixfreqError,
    Observation, Series, SeriesMeta,
};

/// Lifecycle state of a [`PanelBuilder`].
///
/// Finalization consumes the builder, so a finalized panel is represented by
/// the returned [`FrequencyPanel`] rather than a third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Index only; no series merged yet.
    Empty,
    /// At least one series merged.
    Accumulating,
}

/// Builds one [`FrequencyPanel`]: empty grid → one column per merged series →
/// finalized panel.
#[derive(Debug, Clone)]
pub struct PanelBuilder {
    table: FrequencyTable,
    meta: MetadataTable,
}

impl PanelBuilder {
    /// Seed a panel with the calendar grid of `frequency` between `start` and `end`.
    ///
    /// `start` is normalized first (annual grids start on January 1st).
    #[must_use]
    pub fn new(frequency: Frequency, start: NaiveDate, end: NaiveDate) -> Self {
        let start = normalize_start(start, frequency);
        Self {
            table: FrequencyTable::new(frequency, calendar_grid(start, end, frequency)),
            meta: MetadataTable::new(),
        }
    }

    /// Target frequency.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.table.frequency()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> PanelState {
        if self.meta.is_empty() {
            PanelState::Empty
        } else {
            PanelState::Accumulating
        }
    }

    /// The accumulating data table.
    #[must_use]
    pub const fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// The accumulating metadata table.
    #[must_use]
    pub const fn metadata(&self) -> &MetadataTable {
        &self.meta
    }

    /// Outer-join already aligned observations as a new column and record its metadata.
    ///
    /// # Errors
    /// Returns `DuplicateSeries` if `id` was already merged into this panel.
    /// On any error both tables are left exactly as they were.
    pub fn add_column(
        &mut self,
        id: &str,
        observations: &[Observation],
        meta: SeriesMeta,
    ) -> Result<(), MixfreqError> {
        if self.meta.contains(id) {
            return Err(MixfreqError::DuplicateSeries { id: id.to_string() });
        }
        let joined = outer_join(&self.table, id, observations)?;
        self.meta.insert(id, meta)?;
        self.table = joined;
        Ok(())
    }

    /// Align `series` to this panel's frequency and add it as a new column.
    ///
    /// # Errors
    /// See [`add_column`](Self::add_column).
    pub fn add_series(&mut self, series: Series) -> Result<(), MixfreqError> {
        let aligned = align_to_target(&series, self.frequency());
        let id = series.id().to_string();
        let (_, meta) = series.into_parts();
        self.add_column(&id, &aligned, meta)
    }

    /// Finalize the panel.
    ///
    /// - Data columns are ordered to match the metadata table.
    /// - Index dates move to the frequency's anchor (quarterly +2 months,
    ///   annual +6 months).
    /// - Trailing rows where every column is missing are removed. Rows with at
    ///   least one value are kept, and a panel without columns keeps its index.
    ///
    /// # Errors
    /// Returns `Data` if the shifted index is no longer strictly increasing,
    /// which only happens for dates off the frequency's calendar.
    pub fn finalize(self) -> Result<FrequencyPanel, MixfreqError> {
        let (frequency, index, columns) = self.table.into_parts();

        let mut pending: Vec<Option<DataColumn>> = columns.into_iter().map(Some).collect();
        let mut ordered: Vec<DataColumn> = Vec::with_capacity(self.meta.len());
        for id in self.meta.column_ids() {
            if let Some(col) = pending
                .iter_mut()
                .find(|c| c.as_ref().is_some_and(|c| c.id == id))
                .and_then(Option::take)
            {
                ordered.push(col);
            }
        }

        let mut index: Vec<NaiveDate> = index
            .into_iter()
            .map(|d| shift_to_anchor(d, frequency).unwrap_or(d))
            .collect();

        if !ordered.is_empty() {
            let keep = index
                .iter()
                .enumerate()
                .rev()
                .find(|(row, _)| ordered.iter().any(|c| c.values[*row].is_some()))
                .map_or(0, |(row, _)| row + 1);
            #[cfg(feature = "tracing")]
            tracing::debug!(
                frequency = %frequency,
                pruned = index.len() - keep,
                "pruning trailing all-missing rows"
            );
            index.truncate(keep);
            for c in &mut ordered {
                c.values.truncate(keep);
            }
        }

        Ok(FrequencyPanel {
            data: FrequencyTable::from_parts(frequency, index, ordered)?,
            meta: self.meta,
        })
    }
}
