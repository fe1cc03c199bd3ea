use std::time::Duration;

use mixfreq::{Frequency, MixfreqError, PanelConfig};
use mixfreq_mock::{DynamicMockSource, MockBehavior};

use crate::helpers::{builder_with, d, monthly_obs, raw};

fn config() -> PanelConfig {
    PanelConfig::builder()
        .frequency(Frequency::Monthly, ["A"])
        .start_date("2000-01-01")
        .build()
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn single_connect_failure_is_retried_after_the_delay() {
    let (source, controller) = DynamicMockSource::new_with_controller("dyn");
    controller
        .fail_next_connect(MixfreqError::connection("dyn", "reset"))
        .await;
    controller
        .set_fetch_behavior(
            "A",
            MockBehavior::Return(raw("A", "Monthly", monthly_obs(d(2000, 1, 1), &[1.0]))),
        )
        .await;

    let mf = builder_with(source)
        .connect_retry_delay(Duration::from_secs(2))
        .build()
        .unwrap();
    let started = tokio::time::Instant::now();
    let report = mf.run(&config()).await.unwrap();

    assert!(started.elapsed() >= Duration::from_secs(2));
    assert_eq!(controller.connect_attempts().await, 2);
    assert!(report.panel(Frequency::Monthly).is_some());
}

#[tokio::test(start_paused = true)]
async fn second_connect_failure_is_fatal() {
    let (source, controller) = DynamicMockSource::new_with_controller("dyn");
    controller
        .fail_next_connect(MixfreqError::connection("dyn", "refused"))
        .await;
    controller
        .fail_next_connect(MixfreqError::source_error("dyn", "503"))
        .await;

    let err = builder_with(source)
        .build()
        .unwrap()
        .run(&config())
        .await
        .unwrap_err();

    assert!(matches!(err, MixfreqError::Connection { .. }));
    assert!(err.is_fatal());
    assert_eq!(controller.connect_attempts().await, 2);
    assert!(controller.get_fetch_requests().await.is_empty());
}
