use chrono::{Datelike, TimeDelta, Weekday};

use crate::Observation;

/// Days added to a weekly observation dated on `weekday` to land on Friday.
///
/// Monday and Tuesday move back to the previous Friday; Wednesday and Thursday
/// move forward to the coming Friday; weekend dates move back.
#[must_use]
pub const fn friday_shift(weekday: Weekday) -> i64 {
    match weekday {
        Weekday::Mon => -3,
        Weekday::Tue => -4,
        Weekday::Wed => 2,
        Weekday::Thu => 1,
        Weekday::Fri => 0,
        Weekday::Sat => -1,
        Weekday::Sun => -2,
    }
}

/// Re-date a weekly series onto Fridays.
///
/// Precondition: every observation falls on the same weekday as the first
/// one. The shift is chosen from the first observation only and applied to
/// all of them; a series that mixes weekdays keeps its spacing and will not
/// land entirely on Fridays.
///
/// Realigning a Friday-dated series returns it unchanged.
#[must_use]
pub fn realign_weekly(observations: Vec<Observation>) -> Vec<Observation> {
    let Some(first) = observations.first() else {
        return observations;
    };
    let shift = friday_shift(first.date.weekday());
    if shift == 0 {
        return observations;
    }
    let delta = TimeDelta::days(shift);
    observations
        .into_iter()
        .filter_map(|o| {
            Some(Observation {
                date: o.date.checked_add_signed(delta)?,
                value: o.value,
            })
        })
        .collect()
}
