use std::sync::Arc;
use std::time::Duration;

use mixfreq::{Frequency, MixfreqError, Observation, PanelConfig};
use mixfreq_mock::{DynamicMockSource, MockBehavior, MockSource};

use crate::helpers::{builder_with, d, data_ids, meta_ids, mixfreq_with, monthly_obs, raw};

fn monthly_config(ids: &[&str]) -> PanelConfig {
    PanelConfig::builder()
        .frequency(Frequency::Monthly, ids.iter().copied())
        .start_date("2000-01-01")
        .build()
        .unwrap()
}

#[tokio::test]
async fn one_failing_series_leaves_the_others() {
    let report = mixfreq_with(Arc::new(MockSource::new()))
        .run(&monthly_config(&["INDPRO", "FAIL", "UNRATE"]))
        .await
        .unwrap();

    let m = report.panel(Frequency::Monthly).unwrap();
    assert_eq!(data_ids(m), vec!["INDPRO", "UNRATE"]);
    assert_eq!(meta_ids(m), vec!["INDPRO", "UNRATE"]);

    assert_eq!(report.warnings.len(), 1);
    let w = &report.warnings[0];
    assert_eq!(w.frequency, Frequency::Monthly);
    assert_eq!(w.id, "FAIL");
    assert!(matches!(w.error, MixfreqError::Source { .. }));
}

#[tokio::test]
async fn unknown_native_frequency_and_missing_series_are_reported() {
    let report = mixfreq_with(Arc::new(MockSource::new()))
        .run(&monthly_config(&["BIWEEKLY", "NOPE", "INDPRO"]))
        .await
        .unwrap();

    let errors: Vec<_> = report
        .failures_for(Frequency::Monthly)
        .map(|f| (f.id.as_str(), &f.error))
        .collect();
    assert_eq!(errors.len(), 2);
    assert!(matches!(errors[0], ("BIWEEKLY", MixfreqError::UnknownFrequency { .. })));
    assert!(matches!(errors[1], ("NOPE", MixfreqError::NotFound { .. })));
    assert_eq!(data_ids(report.panel(Frequency::Monthly).unwrap()), vec!["INDPRO"]);
}

#[tokio::test(start_paused = true)]
async fn hung_fetch_times_out_per_series() {
    let (source, controller) = DynamicMockSource::new_with_controller("dyn");
    controller.set_fetch_behavior("H", MockBehavior::Hang).await;
    controller
        .set_fetch_behavior(
            "A",
            MockBehavior::Return(raw("A", "Monthly", monthly_obs(d(2000, 1, 1), &[1.0, 2.0]))),
        )
        .await;

    let mf = builder_with(source)
        .fetch_timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let report = mf.run(&monthly_config(&["H", "A"])).await.unwrap();

    assert_eq!(report.warnings.len(), 1);
    assert_eq!(
        report.warnings[0].error,
        MixfreqError::fetch_timeout("dyn", "H")
    );
    assert_eq!(data_ids(report.panel(Frequency::Monthly).unwrap()), vec!["A"]);
}

#[tokio::test]
async fn unordered_observations_are_rejected() {
    let (source, controller) = DynamicMockSource::new_with_controller("dyn");
    controller
        .set_fetch_behavior(
            "BAD",
            MockBehavior::Return(raw(
                "BAD",
                "Monthly",
                vec![
                    Observation::new(d(2000, 2, 1), 1.0),
                    Observation::new(d(2000, 1, 1), 2.0),
                ],
            )),
        )
        .await;

    let report = mixfreq_with(source).run(&monthly_config(&["BAD"])).await.unwrap();
    assert!(matches!(report.warnings[0].error, MixfreqError::Data(_)));
}

#[tokio::test]
async fn foreign_errors_are_attributed_to_the_source() {
    let (source, controller) = DynamicMockSource::new_with_controller("dyn");
    controller
        .set_fetch_behavior(
            "X",
            MockBehavior::Fail(MixfreqError::InvalidArg("bad key".into())),
        )
        .await;

    let report = mixfreq_with(source).run(&monthly_config(&["X"])).await.unwrap();
    match &report.warnings[0].error {
        MixfreqError::Source { source_name, msg } => {
            assert_eq!(source_name, "dyn");
            assert!(msg.contains("bad key"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn panel_without_successful_series_keeps_the_full_grid() {
    let config = PanelConfig::builder()
        .frequency(Frequency::Quarterly, ["FAIL"])
        .start_date("2020-01-01")
        .build()
        .unwrap();
    let report = mixfreq_with(Arc::new(MockSource::new()))
        .run(&config)
        .await
        .unwrap();

    let q = report.panel(Frequency::Quarterly).unwrap();
    assert!(q.meta.is_empty());
    assert_eq!(q.data.len(), 44);
    assert_eq!(q.data.index().first(), Some(&d(2020, 3, 1)));
    assert_eq!(q.data.index().last(), Some(&d(2030, 12, 1)));
}
