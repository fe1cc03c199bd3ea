mod common;

use mixfreq::{Frequency, Mixfreq, PanelConfig};

const CONFIG: &str = r#"{
    "series": {
        "Monthly": "INDPRO, UNRATE",
        "quarterly": ["GDP", "INDPRO", ""],
        "Decadal": ["POP"]
    },
    "start_dates": "2000-01-01"
}"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = PanelConfig::from_json_str(CONFIG)?;
    for ignored in config.ignored_sections() {
        eprintln!("ignoring section {ignored:?}");
    }

    let mixfreq = Mixfreq::builder().with_source(common::get_source()).build()?;
    let report = mixfreq.run(&config).await?;

    if let Some(q) = report.panel(Frequency::Quarterly) {
        common::print_panel(q, 8);
    }

    // Every DTO serializes; dump the monthly panel as JSON.
    if let Some(m) = report.panel(Frequency::Monthly) {
        println!("{}", serde_json::to_string_pretty(m)?);
    }

    Ok(())
}
