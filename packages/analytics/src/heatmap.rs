//! Deterministic five-year seasonal heatmaps.
//!
//! The grid is synthetic: it is a pure function of the ward id, the metric
//! and the year it is centred on, so the same ward always renders the same
//! history. Winters run high, the monsoon runs clean, past years drift
//! slightly worse and projected years improve.

use ward_air_analytics_models::{HeatmapCell, HeatmapGrid, HeatmapMetric, HeatmapYear};

/// Short month names, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Years shown either side of the current one.
pub const YEARS_EITHER_SIDE: i32 = 2;

/// Lowest AQI a heatmap cell can show.
const VALUE_FLOOR: f64 = 30.0;

/// Amplitude of the per-ward sine wobble.
const WOBBLE: f64 = 30.0;

/// PM2.5 is plotted as this fraction of the AQI value.
const PM25_SHARE: f64 = 0.6;

/// Builds the grid for `ward_id`, centred on `current_year`.
#[must_use]
pub fn generate_heatmap(ward_id: &str, metric: HeatmapMetric, current_year: i32) -> HeatmapGrid {
    let seed = id_seed(ward_id);

    let years = (-YEARS_EITHER_SIDE..=YEARS_EITHER_SIDE)
        .zip(0_u32..)
        .map(|(offset, year_index)| {
            let year = current_year + offset;
            let months = (0_u8..12)
                .map(|month_index| {
                    let value = cell_value(seed, year_index, month_index, offset > 0, metric);
                    HeatmapCell {
                        month_index,
                        month: MONTH_LABELS[usize::from(month_index)].to_string(),
                        value,
                        label: bucket_label(metric, value).to_string(),
                    }
                })
                .collect();

            HeatmapYear { year, months }
        })
        .collect();

    HeatmapGrid {
        ward_id: ward_id.to_string(),
        metric,
        years,
    }
}

/// Severity label for a heatmap value.
///
/// These bands are finer than the ward categories: AQI has a "Very Poor"
/// band up to 300, and PM2.5 uses its own scale.
#[must_use]
pub const fn bucket_label(metric: HeatmapMetric, value: u32) -> &'static str {
    match metric {
        HeatmapMetric::Aqi => match value {
            0..=50 => "Good",
            51..=100 => "Moderate",
            101..=200 => "Poor",
            201..=300 => "Very Poor",
            _ => "Severe",
        },
        HeatmapMetric::Pm25 => match value {
            0..=30 => "Safe",
            31..=60 => "Acceptable",
            61..=90 => "Unhealthy",
            _ => "Critical",
        },
    }
}

/// Seasonal AQI baseline for a zero-based month.
#[must_use]
pub const fn seasonal_base(month_index: u8) -> f64 {
    match month_index {
        // Oct-Jan
        9..=11 | 0 => 250.0,
        // Feb-Apr
        1..=3 => 180.0,
        // May-Jun
        4 | 5 => 150.0,
        // Monsoon
        _ => 60.0,
    }
}

/// Sum of the character codes of `ward_id`.
#[must_use]
pub fn id_seed(ward_id: &str) -> u32 {
    ward_id.chars().map(u32::from).sum()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cell_value(
    seed: u32,
    year_index: u32,
    month_index: u8,
    projected: bool,
    metric: HeatmapMetric,
) -> u32 {
    let wobble = f64::from(seed + year_index * 10 + u32::from(month_index)).sin() * WOBBLE;
    let slope = if projected { -20.0 } else { -5.0 };
    let trend = (f64::from(year_index) - 1.0) * slope;

    let aqi = (seasonal_base(month_index) + wobble + trend)
        .round()
        .max(VALUE_FLOOR);

    match metric {
        HeatmapMetric::Aqi => aqi as u32,
        HeatmapMetric::Pm25 => (aqi * PM25_SHARE).round() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_inputs_give_same_grid() {
        let a = generate_heatmap("DEL-10", HeatmapMetric::Aqi, 2026);
        let b = generate_heatmap("DEL-10", HeatmapMetric::Aqi, 2026);
        assert_eq!(a, b);
    }

    #[test]
    fn different_wards_differ() {
        let a = generate_heatmap("DEL-10", HeatmapMetric::Aqi, 2026);
        let b = generate_heatmap("MUM-15", HeatmapMetric::Aqi, 2026);
        assert_ne!(a.years, b.years);
    }

    #[test]
    fn five_years_of_twelve_months() {
        let grid = generate_heatmap("BAN-20", HeatmapMetric::Pm25, 2026);
        let years: Vec<i32> = grid.years.iter().map(|y| y.year).collect();
        assert_eq!(years, vec![2024, 2025, 2026, 2027, 2028]);

        for year in &grid.years {
            assert_eq!(year.months.len(), 12);
            assert_eq!(year.months[0].month, "Jan");
            assert_eq!(year.months[11].month, "Dec");
        }
    }

    #[test]
    fn aqi_values_respect_floor() {
        for id in ["DEL-10", "KOL-24", "W-CP", "X"] {
            let grid = generate_heatmap(id, HeatmapMetric::Aqi, 2026);
            for cell in grid.years.iter().flat_map(|y| &y.months) {
                assert!(cell.value >= 30, "{id} {}: {}", cell.month, cell.value);
            }
        }
    }

    #[test]
    fn pm25_is_sixty_percent_of_aqi() {
        let aqi = generate_heatmap("MUM-15", HeatmapMetric::Aqi, 2026);
        let pm = generate_heatmap("MUM-15", HeatmapMetric::Pm25, 2026);

        for (a, p) in aqi.years.iter().zip(&pm.years) {
            for (a, p) in a.months.iter().zip(&p.months) {
                let expected = (f64::from(a.value) * 0.6).round();
                assert!((f64::from(p.value) - expected).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn winter_is_worse_than_monsoon() {
        let grid = generate_heatmap("DEL-11", HeatmapMetric::Aqi, 2026);
        for year in &grid.years {
            assert!(year.months[10].value > year.months[7].value);
        }
    }

    #[test]
    fn cell_matches_formula() {
        let seed = id_seed("AB");
        assert_eq!(seed, 65 + 66);

        // Year index 0, March: base 180, trend (0 - 1) * -5 = 5.
        let wobble = f64::from(seed + 2).sin() * 30.0;
        let expected = (180.0 + wobble + 5.0).round().max(30.0);
        let grid = generate_heatmap("AB", HeatmapMetric::Aqi, 2026);
        assert!((f64::from(grid.years[0].months[2].value) - expected).abs() < f64::EPSILON);

        // Year index 4 is projected: trend (4 - 1) * -20 = -60.
        let wobble = f64::from(seed + 40 + 9).sin() * 30.0;
        let expected = (250.0 + wobble - 60.0).round().max(30.0);
        assert!((f64::from(grid.years[4].months[9].value) - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn aqi_labels() {
        assert_eq!(bucket_label(HeatmapMetric::Aqi, 40), "Good");
        assert_eq!(bucket_label(HeatmapMetric::Aqi, 100), "Moderate");
        assert_eq!(bucket_label(HeatmapMetric::Aqi, 150), "Poor");
        assert_eq!(bucket_label(HeatmapMetric::Aqi, 300), "Very Poor");
        assert_eq!(bucket_label(HeatmapMetric::Aqi, 310), "Severe");
    }

    #[test]
    fn pm25_labels() {
        assert_eq!(bucket_label(HeatmapMetric::Pm25, 30), "Safe");
        assert_eq!(bucket_label(HeatmapMetric::Pm25, 45), "Acceptable");
        assert_eq!(bucket_label(HeatmapMetric::Pm25, 90), "Unhealthy");
        assert_eq!(bucket_label(HeatmapMetric::Pm25, 91), "Critical");
    }

    #[test]
    fn cells_carry_their_label() {
        let grid = generate_heatmap("HYD-18", HeatmapMetric::Aqi, 2026);
        for cell in grid.years.iter().flat_map(|y| &y.months) {
            assert_eq!(cell.label, bucket_label(HeatmapMetric::Aqi, cell.value));
        }
    }
}
