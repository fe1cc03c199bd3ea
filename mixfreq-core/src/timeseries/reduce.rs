use chrono::NaiveDate;

use crate::Frequency;
use crate::Observation;
use crate::timeseries::calendar::{period_label, step_forward};

/// Reduce a native-frequency series to a coarser target frequency.
///
/// Steps:
/// 1. Leading missing values are dropped; they precede the observed span.
/// 2. A missing observation is appended one native step after the last date.
/// 3. Interior gaps are filled by linear interpolation (see [`interpolate_linear`]).
/// 4. Values are averaged per target period (see [`mean_by_period`]).
///
/// Because a period containing a missing value averages to missing, the
/// appended point drops the last period whenever the sample ends before that
/// period is complete. Periods at the start of the sample are averaged over
/// whatever observations exist.
///
/// If `target` is not strictly coarser than `native` the input is returned
/// unchanged.
#[must_use]
pub fn reduce(observations: &[Observation], native: Frequency, target: Frequency) -> Vec<Observation> {
    if !target.is_coarser_than(native) {
        return observations.to_vec();
    }
    let Some(first_real) = observations.iter().position(|o| !o.is_missing()) else {
        return Vec::new();
    };

    let mut work: Vec<Observation> = observations[first_real..].to_vec();
    if let Some(next) = work.last().and_then(|o| step_forward(o.date, native)) {
        work.push(Observation::missing(next));
    }
    interpolate_linear(&mut work);
    mean_by_period(&work, |d| period_label(d, target))
}

/// Fill missing values lying strictly between two present values by linear
/// interpolation over position. Observations are treated as equally spaced,
/// so elapsed days between dates play no part. Leading and trailing missing
/// values are left untouched.
pub fn interpolate_linear(observations: &mut [Observation]) {
    let mut last_known: Option<(usize, f64)> = None;
    for j in 0..observations.len() {
        let Some(vj) = observations[j].value else {
            continue;
        };
        if let Some((i, vi)) = last_known
            && j - i > 1
        {
            #[allow(clippy::cast_precision_loss)]
            let span = (j - i) as f64;
            for (k, o) in observations.iter_mut().enumerate().take(j).skip(i + 1) {
                #[allow(clippy::cast_precision_loss)]
                let t = (k - i) as f64 / span;
                o.value = Some((vj - vi).mul_add(t, vi));
            }
        }
        last_known = Some((j, vj));
    }
}

/// Group date-sorted observations by `bucket_of` and average each group.
///
/// A group containing any missing value yields a missing value. Observations
/// for which `bucket_of` returns `None` are skipped.
pub fn mean_by_period<F>(observations: &[Observation], bucket_of: F) -> Vec<Observation>
where
    F: Fn(NaiveDate) -> Option<NaiveDate>,
{
    let mut out: Vec<Observation> = Vec::new();
    let mut iter = observations
        .iter()
        .filter_map(|o| bucket_of(o.date).map(|b| (b, o.value)));
    let Some((mut cur_bucket, first)) = iter.next() else {
        return out;
    };
    let mut agg = BucketAgg::start(first);

    for (bucket, value) in iter {
        if bucket == cur_bucket {
            agg.push(value);
        } else {
            out.push(agg.finish(cur_bucket));
            cur_bucket = bucket;
            agg = BucketAgg::start(value);
        }
    }
    out.push(agg.finish(cur_bucket));
    out
}

struct BucketAgg {
    sum: f64,
    count: u32,
    incomplete: bool,
}

impl BucketAgg {
    fn start(value: Option<f64>) -> Self {
        let mut agg = Self {
            sum: 0.0,
            count: 0,
            incomplete: false,
        };
        agg.push(value);
        agg
    }

    fn push(&mut self, value: Option<f64>) {
        match value {
            Some(v) => {
                self.sum += v;
                self.count += 1;
            }
            None => self.incomplete = true,
        }
    }

    fn finish(self, bucket: NaiveDate) -> Observation {
        let value = (!self.incomplete && self.count > 0).then(|| self.sum / f64::from(self.count));
        Observation { date: bucket, value }
    }
}
