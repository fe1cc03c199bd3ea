use std::sync::Arc;

use mixfreq::{Frequency, PanelConfig};
use mixfreq_mock::DynamicMockSource;

use crate::helpers::{TableSource, builder_with, d, data_ids, monthly_obs, raw};

fn abc_source() -> TableSource {
    TableSource::new("table")
        .with(raw("A", "Monthly", monthly_obs(d(2000, 1, 1), &[1.0, 2.0])))
        .with(raw("B", "Monthly", monthly_obs(d(2000, 1, 1), &[3.0, 4.0])))
        .with(raw("C", "Monthly", monthly_obs(d(2000, 1, 1), &[5.0, 6.0])))
}

fn abc_config() -> PanelConfig {
    PanelConfig::builder()
        .frequency(Frequency::Monthly, ["A", "B", "C"])
        .start_date("2000-01-01")
        .build()
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn merge_order_follows_configuration_not_completion() {
    let source = abc_source().with_delay("A", 300).with_delay("B", 100);
    let completed = Arc::clone(&source.completed);

    let report = builder_with(Arc::new(source))
        .max_concurrency(3)
        .build()
        .unwrap()
        .run(&abc_config())
        .await
        .unwrap();

    assert_eq!(*completed.lock().await, vec!["C", "B", "A"]);
    assert_eq!(
        data_ids(report.panel(Frequency::Monthly).unwrap()),
        vec!["A", "B", "C"]
    );
}

#[tokio::test(start_paused = true)]
async fn single_slot_fetches_sequentially() {
    let source = abc_source().with_delay("A", 300).with_delay("B", 100);
    let completed = Arc::clone(&source.completed);

    builder_with(Arc::new(source))
        .max_concurrency(1)
        .build()
        .unwrap()
        .run(&abc_config())
        .await
        .unwrap();

    assert_eq!(*completed.lock().await, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn fetch_window_uses_normalized_start_and_horizon_end() {
    let (source, controller) = DynamicMockSource::new_with_controller("dyn");
    let config = PanelConfig::builder()
        .frequency(Frequency::Annual, ["X"])
        .frequency(Frequency::Monthly, ["Y"])
        .start_date("2000-06-15")
        .build()
        .unwrap();

    let report = builder_with(source).build().unwrap().run(&config).await.unwrap();
    assert_eq!(report.warnings.len(), 2);

    let reqs = controller.get_fetch_requests().await;
    assert_eq!(reqs.len(), 2);
    assert_eq!((reqs[0].id.as_str(), reqs[0].start), ("X", d(2000, 1, 1)));
    assert_eq!((reqs[1].id.as_str(), reqs[1].start), ("Y", d(2000, 6, 15)));
    assert!(reqs.iter().all(|r| r.end == d(2030, 10, 18)));
}
