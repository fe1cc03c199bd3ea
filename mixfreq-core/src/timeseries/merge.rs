use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{DataColumn, FrequencyTable, MixfreqError, Observation};

/// Outer-join a series into `table` as a new last column named `id`.
///
/// - The result index is the sorted union of the table index and the series dates.
/// - Rows only present in the table get a missing cell in the new column; rows
///   only present in the series get missing cells in every existing column.
/// - Duplicate dates in `observations`: the first appearance wins.
/// - `table` is not modified; callers swap in the returned table on success.
///
/// # Errors
/// Returns `Data` if `table` itself violates the index/column length invariant.
pub fn outer_join(
    table: &FrequencyTable,
    id: &str,
    observations: &[Observation],
) -> Result<FrequencyTable, MixfreqError> {
    let mut incoming: BTreeMap<NaiveDate, Option<f64>> = BTreeMap::new();
    for o in observations {
        incoming.entry(o.date).or_insert(o.value);
    }

    let old_index = table.index();
    let mut index: Vec<NaiveDate> = Vec::with_capacity(old_index.len().max(incoming.len()));
    // For every output row: the source row in `table`, if any.
    let mut source_rows: Vec<Option<usize>> = Vec::with_capacity(index.capacity());
    let mut new_values: Vec<Option<f64>> = Vec::with_capacity(index.capacity());

    let mut left = old_index.iter().copied().enumerate().peekable();
    let mut right = incoming.into_iter().peekable();
    loop {
        let order = match (left.peek(), right.peek()) {
            (None, None) => break,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some((_, l)), Some((r, _))) => l.cmp(r),
        };
        match order {
            Ordering::Less => {
                if let Some((row, date)) = left.next() {
                    index.push(date);
                    source_rows.push(Some(row));
                    new_values.push(None);
                }
            }
            Ordering::Greater => {
                if let Some((date, value)) = right.next() {
                    index.push(date);
                    source_rows.push(None);
                    new_values.push(value);
                }
            }
            Ordering::Equal => {
                if let (Some((row, date)), Some((_, value))) = (left.next(), right.next()) {
                    index.push(date);
                    source_rows.push(Some(row));
                    new_values.push(value);
                }
            }
        }
    }

    let mut columns: Vec<DataColumn> = table
        .columns()
        .iter()
        .map(|c| DataColumn {
            id: c.id.clone(),
            values: source_rows
                .iter()
                .map(|r| r.and_then(|i| c.values.get(i).copied().flatten()))
                .collect(),
        })
        .collect();
    columns.push(DataColumn {
        id: id.to_string(),
        values: new_values,
    });

    FrequencyTable::from_parts(table.frequency(), index, columns)
}
