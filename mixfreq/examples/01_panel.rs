mod common;

use mixfreq::{Frequency, Mixfreq, PanelConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mixfreq = Mixfreq::builder()
        .with_source(common::get_source())
        .fetch_timeout(std::time::Duration::from_secs(10))
        .build()?;

    let config = PanelConfig::builder()
        .frequency(Frequency::Weekly, ["ICSA", "DFF"])
        .frequency(Frequency::Monthly, ["INDPRO", "UNRATE", "ICSA"])
        .frequency(Frequency::Quarterly, ["GDP", "INDPRO", "UNRATE"])
        .frequency(Frequency::Annual, ["POP", "GDP"])
        .start_date("2000-01-01")
        .start_date("2000-01-01")
        .start_date("2000-01-01")
        .start_date("2000-06-15")
        .build()?;

    let report = mixfreq.run(&config).await?;
    for panel in report.panels.values() {
        common::print_panel(panel, 6);
        println!();
    }

    if !report.warnings.is_empty() {
        eprintln!("warnings:");
        for w in report.warnings {
            eprintln!("- [{}] {}: {}", w.frequency, w.id, w.error);
        }
    }

    Ok(())
}
