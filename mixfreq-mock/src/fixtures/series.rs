use chrono::{Days, Months, NaiveDate};
use mixfreq_core::{Observation, RawSeries, SeriesMeta};

/// Catalog entry for `id`, with every observation on or after 2000-01-01.
pub fn by_id(id: &str) -> Option<RawSeries> {
    match id {
        // Monthly index, Jan 2000 .. Dec 2001, valued 1.0, 2.0, ...
        "INDPRO" => Some(build(
            id,
            "Monthly",
            meta("Industrial Production: Total Index", "Index 2017=100", "Seasonally Adjusted"),
            monthly(d(2000, 1, 1), 24, |i| f64::from(i + 1)),
        )),
        // Quarterly, eight quarters of 2000-2001.
        "GDP" => Some(build(
            id,
            "Quarterly",
            meta(
                "Gross Domestic Product",
                "Billions of Dollars",
                "Seasonally Adjusted Annual Rate",
            ),
            stepped(8, |n| advance_months(d(2000, 1, 1), 3 * n), |i| {
                10_000.0 + 100.0 * f64::from(i)
            }),
        )),
        // Weekly, dated on Saturdays (2000-01-01 is a Saturday), 104 weeks.
        "ICSA" => Some(build(
            id,
            "Weekly, Ending Saturday",
            meta("Initial Claims", "Number", "Seasonally Adjusted"),
            stepped(104, |n| d(2000, 1, 1).checked_add_days(Days::new(7 * u64::from(n))), |i| {
                300_000.0 + 1_000.0 * f64::from(i % 10)
            }),
        )),
        // Daily, every calendar day of 2000.
        "DFF" => Some(build(
            id,
            "Daily, 7-Day",
            meta("Federal Funds Effective Rate", "Percent", "Not Seasonally Adjusted"),
            stepped(366, |n| d(2000, 1, 1).checked_add_days(Days::new(u64::from(n))), |i| {
                5.0 + f64::from(i % 4) * 0.25
            }),
        )),
        // Annual, 2000-2005.
        "POP" => Some(build(
            id,
            "Annual",
            meta("Population", "Thousands of Persons", "Not Seasonally Adjusted"),
            stepped(6, |n| advance_months(d(2000, 1, 1), 12 * n), |i| {
                280_000.0 + 2_500.0 * f64::from(i)
            }),
        )),
        // Monthly with a gap in Mar 2000 and trailing missing values.
        "UNRATE" => Some(build(
            id,
            "Monthly",
            meta("Unemployment Rate", "Percent", "Seasonally Adjusted"),
            monthly(d(2000, 1, 1), 12, |i| 4.0 + f64::from(i) * 0.1)
                .into_iter()
                .enumerate()
                .map(|(i, o)| if i == 2 || i >= 10 { Observation::missing(o.date) } else { o })
                .collect(),
        )),
        // Native frequency label that no target frequency understands.
        "BIWEEKLY" => Some(build(
            id,
            "Biweekly, Ending Wednesday",
            meta("Biweekly Series", "Number", "Not Seasonally Adjusted"),
            monthly(d(2000, 1, 1), 3, f64::from),
        )),
        _ => None,
    }
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap_or(NaiveDate::MIN)
}

fn advance_months(date: NaiveDate, n: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(n))
}

fn monthly(start: NaiveDate, count: u32, value: impl Fn(u32) -> f64) -> Vec<Observation> {
    stepped(count, |n| advance_months(start, n), value)
}

fn stepped(
    count: u32,
    date_of: impl Fn(u32) -> Option<NaiveDate>,
    value: impl Fn(u32) -> f64,
) -> Vec<Observation> {
    (0..count)
        .filter_map(|i| date_of(i).map(|date| Observation::new(date, value(i))))
        .collect()
}

fn meta(title: &str, units: &str, seasonal_adjustment: &str) -> SeriesMeta {
    SeriesMeta {
        title: title.to_string(),
        units: units.to_string(),
        seasonal_adjustment: seasonal_adjustment.to_string(),
        source: "Mock Statistical Office".to_string(),
    }
}

fn build(id: &str, label: &str, meta: SeriesMeta, observations: Vec<Observation>) -> RawSeries {
    RawSeries {
        id: id.to_string(),
        frequency_label: label.to_string(),
        observations,
        meta,
    }
}
