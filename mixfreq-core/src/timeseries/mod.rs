//! Time-series utilities behind every frequency panel.
//!
//! Modules include:
//! - `calendar`: canonical grids, period labels and anchor shifts
//! - `realign`: move weekly series onto Fridays
//! - `reduce`: interpolate-then-average reduction to a coarser frequency
//! - `merge`: outer join of a series into a panel table
/// Calendar grids, period labels and anchor conventions.
pub mod calendar;
/// Outer join of a series into a frequency table.
pub mod merge;
/// Weekly-to-Friday realignment.
pub mod realign;
/// Frequency reduction with incomplete-tail drop.
pub mod reduce;

use crate::{Frequency, Observation, Series};

/// Bring a series onto the calendar of `target`.
///
/// Weekly-native series are first moved onto Fridays; series finer than
/// `target` are then reduced. Series at or coarser than `target` keep their
/// dates.
#[must_use]
pub fn align_to_target(series: &Series, target: Frequency) -> Vec<Observation> {
    let observations = if series.native() == Frequency::Weekly {
        realign::realign_weekly(series.observations().to_vec())
    } else {
        series.observations().to_vec()
    };
    reduce::reduce(&observations, series.native(), target)
}
