//! Per-frequency data and metadata tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::MixfreqError;
use crate::frequency::Frequency;
use crate::series::SeriesMeta;

/// One series column of a [`FrequencyTable`], aligned with the table index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataColumn {
    /// Series identifier.
    pub id: String,
    /// One cell per index row; `None` is missing.
    pub values: Vec<Option<f64>>,
}

/// A shared date index with one column per merged series.
///
/// Every column has exactly as many cells as the index has rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    frequency: Frequency,
    index: Vec<NaiveDate>,
    columns: Vec<DataColumn>,
}

impl FrequencyTable {
    /// Build an index-only table.
    #[must_use]
    pub const fn new(frequency: Frequency, index: Vec<NaiveDate>) -> Self {
        Self {
            frequency,
            index,
            columns: Vec::new(),
        }
    }

    /// Build a table from parts.
    ///
    /// # Errors
    /// Returns `Data` if the index is not strictly increasing or a column length
    /// differs from the index length.
    pub fn from_parts(
        frequency: Frequency,
        index: Vec<NaiveDate>,
        columns: Vec<DataColumn>,
    ) -> Result<Self, MixfreqError> {
        if let Some(w) = index.windows(2).find(|w| w[0] >= w[1]) {
            return Err(MixfreqError::Data(format!(
                "{frequency} index not strictly increasing at {}",
                w[1]
            )));
        }
        if let Some(c) = columns.iter().find(|c| c.values.len() != index.len()) {
            return Err(MixfreqError::Data(format!(
                "{frequency} column {} has {} cells for {} rows",
                c.id,
                c.values.len(),
                index.len()
            )));
        }
        Ok(Self {
            frequency,
            index,
            columns,
        })
    }

    /// Target frequency of the table.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Shared date index.
    #[must_use]
    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    /// Columns in insertion order.
    #[must_use]
    pub fn columns(&self) -> &[DataColumn] {
        &self.columns
    }

    /// Column identifiers in order.
    pub fn column_ids(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.id.as_str())
    }

    /// First column with the given identifier.
    #[must_use]
    pub fn column(&self, id: &str) -> Option<&DataColumn> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Cell lookup by date and identifier. `None` if the row, the column or the value is absent.
    #[must_use]
    pub fn value(&self, date: NaiveDate, id: &str) -> Option<f64> {
        let row = self.index.binary_search(&date).ok()?;
        self.column(id)?.values[row]
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Split into frequency, index and columns.
    #[must_use]
    pub fn into_parts(self) -> (Frequency, Vec<NaiveDate>, Vec<DataColumn>) {
        (self.frequency, self.index, self.columns)
    }
}

/// Row labels of a [`MetadataTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaField {
    /// Series title.
    Title,
    /// Units of measure.
    Units,
    /// Seasonal adjustment label.
    SeasonalAdjustment,
    /// Publishing source.
    Source,
}

impl MetaField {
    /// All rows in table order.
    pub const ALL: [Self; 4] = [
        Self::Title,
        Self::Units,
        Self::SeasonalAdjustment,
        Self::Source,
    ];
}

/// One metadata column: a series identifier and its descriptive fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataColumn {
    /// Series identifier.
    pub id: String,
    /// Descriptive fields.
    pub meta: SeriesMeta,
}

/// Descriptive fields of every merged series, one column per identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataTable {
    columns: Vec<MetadataColumn>,
}

impl MetadataTable {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Record a new column.
    ///
    /// # Errors
    /// Returns `DuplicateSeries` if `id` is already recorded; the table is left unchanged.
    pub fn insert(&mut self, id: impl Into<String>, meta: SeriesMeta) -> Result<(), MixfreqError> {
        let id = id.into();
        if self.contains(&id) {
            return Err(MixfreqError::DuplicateSeries { id });
        }
        self.columns.push(MetadataColumn { id, meta });
        Ok(())
    }

    /// Returns true if `id` has been recorded.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.columns.iter().any(|c| c.id == id)
    }

    /// Descriptive fields for `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SeriesMeta> {
        self.columns.iter().find(|c| c.id == id).map(|c| &c.meta)
    }

    /// Columns in insertion order.
    #[must_use]
    pub fn columns(&self) -> &[MetadataColumn] {
        &self.columns
    }

    /// Column identifiers in order.
    pub fn column_ids(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.id.as_str())
    }

    /// One row of the table, across all columns.
    #[must_use]
    pub fn row(&self, field: MetaField) -> Vec<&str> {
        self.columns
            .iter()
            .map(|c| match field {
                MetaField::Title => c.meta.title.as_str(),
                MetaField::Units => c.meta.units.as_str(),
                MetaField::SeasonalAdjustment => c.meta.seasonal_adjustment.as_str(),
                MetaField::Source => c.meta.source.as_str(),
            })
            .collect()
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if no series has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// A finalized pair of data and metadata tables for one target frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyPanel {
    /// Aligned observations.
    pub data: FrequencyTable,
    /// Descriptive fields, column-aligned with `data`.
    pub meta: MetadataTable,
}

impl FrequencyPanel {
    /// Target frequency of the panel.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.data.frequency()
    }
}
