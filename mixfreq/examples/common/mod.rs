use mixfreq::{FrequencyPanel, MetaField, SeriesSource};
use std::sync::Arc;

#[must_use]
pub fn get_source() -> Arc<dyn SeriesSource> {
    println!("--- (Using Mock Source) ---");
    Arc::new(mixfreq_mock::MockSource::new())
}

/// Print the first `rows` rows of a panel followed by its titles.
#[allow(dead_code)]
pub fn print_panel(panel: &FrequencyPanel, rows: usize) {
    let ids: Vec<&str> = panel.data.column_ids().collect();
    println!("[{}] {} rows x {} series", panel.frequency(), panel.data.len(), ids.len());
    println!("{:<12} {}", "date", ids.join("  "));
    for (row, date) in panel.data.index().iter().enumerate().take(rows) {
        let cells: Vec<String> = panel
            .data
            .columns()
            .iter()
            .map(|c| c.values[row].map_or_else(|| "-".to_string(), |v| format!("{v:.2}")))
            .collect();
        println!("{:<12} {}", date.to_string(), cells.join("  "));
    }
    for (id, title) in ids.iter().zip(panel.meta.row(MetaField::Title)) {
        println!("  {id}: {title}");
    }
}
