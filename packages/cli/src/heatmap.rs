//! Terminal rendering of seasonal heatmaps.

use std::fmt::Write as _;

use ward_air_analytics::heatmap::MONTH_LABELS;
use ward_air_analytics_models::HeatmapGrid;

/// One row per year, one column per month, followed by the labels used.
#[must_use]
pub fn render_heatmap(grid: &HeatmapGrid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} heatmap for {}", grid.metric, grid.ward_id);
    let _ = writeln!(out);

    let _ = write!(out, "{:<6}", "Year");
    for month in MONTH_LABELS {
        let _ = write!(out, "{month:>5}");
    }
    let _ = writeln!(out);

    let mut labels: Vec<&str> = Vec::new();
    for year in &grid.years {
        let _ = write!(out, "{:<6}", year.year);
        for cell in &year.months {
            let _ = write!(out, "{:>5}", cell.value);
            if !labels.contains(&cell.label.as_str()) {
                labels.push(&cell.label);
            }
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Bands: {}", labels.join(", "));
    out
}
