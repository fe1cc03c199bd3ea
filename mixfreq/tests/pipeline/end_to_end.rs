use std::sync::Arc;

use chrono::{Datelike, Weekday};
use mixfreq::{Frequency, MetaField, PanelConfig};
use mixfreq_mock::{DynamicMockSource, MockBehavior, MockSource};

use crate::helpers::{d, data_ids, meta_ids, mixfreq_with, monthly_obs, raw};

#[tokio::test]
async fn same_monthly_series_in_monthly_and_quarterly_panels() {
    let (source, controller) = DynamicMockSource::new_with_controller("dyn");
    let values: Vec<f64> = (1..=12).map(f64::from).collect();
    controller
        .set_fetch_behavior(
            "A",
            MockBehavior::Return(raw("A", "Monthly", monthly_obs(d(2000, 1, 1), &values))),
        )
        .await;

    let config = PanelConfig::builder()
        .frequency(Frequency::Monthly, ["A"])
        .frequency(Frequency::Quarterly, ["A"])
        .start_date("2000-01-01")
        .build()
        .unwrap();
    let report = mixfreq_with(source).run(&config).await.unwrap();
    assert!(report.warnings.is_empty());

    let m = report.panel(Frequency::Monthly).expect("monthly panel");
    assert_eq!(m.data.len(), 12);
    assert_eq!(m.data.value(d(2000, 1, 1), "A"), Some(1.0));
    assert_eq!(m.data.index().last(), Some(&d(2000, 12, 1)));

    let q = report.panel(Frequency::Quarterly).expect("quarterly panel");
    assert_eq!(
        q.data.index(),
        &[d(2000, 3, 1), d(2000, 6, 1), d(2000, 9, 1), d(2000, 12, 1)]
    );
    assert_eq!(q.data.value(d(2000, 3, 1), "A"), Some(2.0));
    assert_eq!(q.data.value(d(2000, 12, 1), "A"), Some(11.0));
}

#[tokio::test]
async fn annual_mid_year_start_is_normalized() {
    let config = PanelConfig::builder()
        .frequency(Frequency::Annual, ["INDPRO"])
        .start_date("2000-06-15")
        .build()
        .unwrap();
    let report = mixfreq_with(Arc::new(MockSource::new()))
        .run(&config)
        .await
        .unwrap();

    let a = report.panel(Frequency::Annual).expect("annual panel");
    assert_eq!(a.data.index(), &[d(2000, 7, 1), d(2001, 7, 1)]);
    assert_eq!(a.data.value(d(2000, 7, 1), "INDPRO"), Some(6.5));
    assert_eq!(a.data.value(d(2001, 7, 1), "INDPRO"), Some(18.5));
}

#[tokio::test]
async fn weekly_series_land_on_fridays() {
    let config = PanelConfig::builder()
        .frequency(Frequency::Weekly, ["ICSA"])
        .start_date("2000-01-01")
        .build()
        .unwrap();
    let report = mixfreq_with(Arc::new(MockSource::new()))
        .run(&config)
        .await
        .unwrap();

    let w = report.panel(Frequency::Weekly).expect("weekly panel");
    assert!(w.data.index().iter().all(|d| d.weekday() == Weekday::Fri));
    // Saturday 2000-01-01 moves back to Friday 1999-12-31, ahead of the grid.
    assert_eq!(w.data.index().first(), Some(&d(1999, 12, 31)));
    assert_eq!(w.data.value(d(1999, 12, 31), "ICSA"), Some(300_000.0));
    assert_eq!(w.data.len(), 104);
}

#[tokio::test]
async fn mixed_natives_share_one_quarterly_table() {
    let config = PanelConfig::builder()
        .frequency(Frequency::Quarterly, ["GDP", "INDPRO", "DFF", "UNRATE"])
        .start_date("2000-01-01")
        .build()
        .unwrap();
    let report = mixfreq_with(Arc::new(MockSource::new()))
        .run(&config)
        .await
        .unwrap();
    assert!(report.warnings.is_empty());

    let q = report.panel(Frequency::Quarterly).expect("quarterly panel");
    assert_eq!(data_ids(q), vec!["GDP", "INDPRO", "DFF", "UNRATE"]);
    assert_eq!(data_ids(q), meta_ids(q));
    assert_eq!(
        q.meta.row(MetaField::Title),
        vec![
            "Gross Domestic Product",
            "Industrial Production: Total Index",
            "Federal Funds Effective Rate",
            "Unemployment Rate",
        ]
    );
    // GDP covers eight quarters; everything after is pruned.
    assert_eq!(q.data.index().last(), Some(&d(2001, 12, 1)));
    // The March gap in UNRATE is interpolated (4.1 .. 4.3), so Q1 is present.
    let q1 = q.data.value(d(2000, 3, 1), "UNRATE").expect("Q1 present");
    assert!((q1 - 4.1).abs() < 1e-9);
    // UNRATE stops in Oct 2000 (Nov and Dec missing), so Q4 2000 is missing.
    assert_eq!(q.data.value(d(2000, 12, 1), "UNRATE"), None);
}

#[tokio::test]
async fn json_configuration_drives_the_run() {
    let config = PanelConfig::from_json_str(
        r#"{
            "series": {
                " Quarterly ": "GDP, INDPRO",
                "hourly": ["X"],
                "monthly": ["UNRATE", "INDPRO", "UNRATE"]
            },
            "start_dates": ["2000-01-01"]
        }"#,
    )
    .unwrap();
    assert_eq!(config.ignored_sections(), ["hourly"]);

    let report = mixfreq_with(Arc::new(MockSource::new()))
        .run(&config)
        .await
        .unwrap();
    assert_eq!(
        report.panels.keys().copied().collect::<Vec<_>>(),
        vec![Frequency::Monthly, Frequency::Quarterly]
    );
    let m = report.panel(Frequency::Monthly).unwrap();
    assert_eq!(data_ids(m), vec!["UNRATE", "INDPRO"]);
}
