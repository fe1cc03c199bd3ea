use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::Frequency;

/// Move `date` forward by `n` calendar units of `freq`.
///
/// Month-based steps clamp to the end of shorter months, so callers stepping
/// from period anchors (always day 1) never observe clamping.
#[must_use]
pub fn advance(date: NaiveDate, freq: Frequency, n: u32) -> Option<NaiveDate> {
    match freq {
        Frequency::Daily => date.checked_add_days(Days::new(u64::from(n))),
        Frequency::Weekly => date.checked_add_days(Days::new(7 * u64::from(n))),
        Frequency::Monthly => date.checked_add_months(Months::new(n)),
        Frequency::Quarterly => date.checked_add_months(Months::new(n.checked_mul(3)?)),
        Frequency::Annual => date.checked_add_months(Months::new(n.checked_mul(12)?)),
    }
}

/// One calendar unit of `freq` after `date`.
#[must_use]
pub fn step_forward(date: NaiveDate, freq: Frequency) -> Option<NaiveDate> {
    advance(date, freq, 1)
}

/// Label of the `freq` period containing `date`.
///
/// - daily: the date itself
/// - weekly: the Friday closing the Saturday..Friday week
/// - monthly: first day of the month
/// - quarterly: first day of the quarter
/// - annual: January 1st
#[must_use]
pub fn period_label(date: NaiveDate, freq: Frequency) -> Option<NaiveDate> {
    match freq {
        Frequency::Daily => Some(date),
        Frequency::Weekly => {
            let to_friday = (Weekday::Fri.num_days_from_monday() + 7
                - date.weekday().num_days_from_monday())
                % 7;
            date.checked_add_days(Days::new(u64::from(to_friday)))
        }
        Frequency::Monthly => NaiveDate::from_ymd_opt(date.year(), date.month(), 1),
        Frequency::Quarterly => {
            NaiveDate::from_ymd_opt(date.year(), date.month0() / 3 * 3 + 1, 1)
        }
        Frequency::Annual => NaiveDate::from_ymd_opt(date.year(), 1, 1),
    }
}

/// First period anchor of `freq` falling on or after `date`.
#[must_use]
pub fn first_anchor_on_or_after(date: NaiveDate, freq: Frequency) -> Option<NaiveDate> {
    let label = period_label(date, freq)?;
    if label >= date {
        Some(label)
    } else {
        step_forward(label, freq)
    }
}

/// Normalize a configured start date before building the grid for `freq`.
///
/// Annual grids start on January 1st of the start year; without this a
/// mid-year start would push the grid to the following year while the
/// aggregated series still carry the January 1st label of the start year.
#[must_use]
pub fn normalize_start(start: NaiveDate, freq: Frequency) -> NaiveDate {
    match freq {
        Frequency::Annual => NaiveDate::from_ymd_opt(start.year(), 1, 1).unwrap_or(start),
        _ => start,
    }
}

/// Build the canonical index for `freq`: every period anchor from the first
/// one on or after `start` up to and including `end`.
#[must_use]
pub fn calendar_grid(start: NaiveDate, end: NaiveDate, freq: Frequency) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut cur = first_anchor_on_or_after(start, freq);
    while let Some(d) = cur {
        if d > end {
            break;
        }
        out.push(d);
        cur = step_forward(d, freq);
    }
    out
}

/// Months added to every index date when a panel is finalized.
///
/// Quarterly panels are dated on the first day of the quarter's third month,
/// annual panels on July 1st.
#[must_use]
pub const fn anchor_shift_months(freq: Frequency) -> u32 {
    match freq {
        Frequency::Quarterly => 2,
        Frequency::Annual => 6,
        Frequency::Daily | Frequency::Weekly | Frequency::Monthly => 0,
    }
}

/// Apply the finalization anchor shift of `freq` to `date`.
#[must_use]
pub fn shift_to_anchor(date: NaiveDate, freq: Frequency) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(anchor_shift_months(freq)))
}

/// End of every calendar grid: `today` plus `years` calendar years.
///
/// February 29th maps to February 28th when the target year is not a leap year.
#[must_use]
pub fn horizon_end(today: NaiveDate, years: u32) -> Option<NaiveDate> {
    today.checked_add_months(Months::new(years.checked_mul(12)?))
}
