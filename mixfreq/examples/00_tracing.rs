mod common;

use mixfreq::{Frequency, Mixfreq, PanelConfig};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,mixfreq=debug,mixfreq_core=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let mixfreq = Mixfreq::builder().with_source(common::get_source()).build()?;

    // One failing series and one unknown native frequency show up as warnings.
    let config = PanelConfig::builder()
        .frequency(Frequency::Monthly, ["INDPRO", "FAIL"])
        .frequency(Frequency::Quarterly, ["GDP", "BIWEEKLY"])
        .section("hourly", ["X"])
        .start_date("2000-01-01")
        .build()?;

    let report = mixfreq.run(&config).await?;
    println!("{} panels, {} warnings", report.panels.len(), report.warnings.len());

    Ok(())
}
