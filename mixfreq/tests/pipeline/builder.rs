use std::sync::Arc;

use mixfreq::{Mixfreq, MixfreqError};
use mixfreq_mock::MockSource;

use crate::helpers::{builder_with, d, mixfreq_with};

#[test]
fn build_without_source_is_rejected() {
    let err = Mixfreq::builder().build().err().expect("error");
    assert!(matches!(err, MixfreqError::InvalidArg(_)));
}

#[test]
fn zero_concurrency_is_rejected() {
    let err = builder_with(Arc::new(MockSource::new()))
        .max_concurrency(0)
        .build()
        .err()
        .expect("error");
    assert!(matches!(err, MixfreqError::InvalidArg(_)));
}

#[test]
fn end_date_is_four_years_past_today() {
    let mf = mixfreq_with(Arc::new(MockSource::new()));
    assert_eq!(mf.end_date().unwrap(), d(2030, 10, 18));
    assert_eq!(mf.config().horizon_years, 4);
    assert_eq!(mf.source_name(), "mixfreq-mock");
}

#[test]
fn horizon_is_configurable() {
    let mf = builder_with(Arc::new(MockSource::new()))
        .horizon_years(1)
        .build()
        .unwrap();
    assert_eq!(mf.end_date().unwrap(), d(2027, 10, 18));
}
