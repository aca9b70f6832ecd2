//! Offline simulation runs.
//!
//! Builds a catalog, applies a number of live updates back to back without
//! waiting on a timer, and prints how every ward moved.

use std::fmt::Write as _;

use ward_air_analytics::city_summary;
use ward_air_catalog::{CatalogError, catalog_by_id};
use ward_air_simulation::stepper::run_ticks;
use ward_air_simulation::{Catalog, SimulationConfig};

/// The catalog before and after an offline run.
pub struct SimulationReport {
    pub start: Catalog,
    pub end: Catalog,
}

/// Builds `catalog_id` from `seed` and applies `ticks` updates.
///
/// # Errors
///
/// Returns [`CatalogError`] if the catalog does not exist.
pub fn run_simulation(
    catalog_id: &str,
    ticks: u64,
    seed: Option<u64>,
) -> Result<SimulationReport, CatalogError> {
    let config = SimulationConfig {
        catalog_id: catalog_id.to_string(),
        seed,
        ..SimulationConfig::default()
    };
    let definition = catalog_by_id(&config.catalog_id)?;
    let mut rng = config.rng();

    let start = Catalog::build(&definition, &mut rng);
    let end = run_ticks(&start, ticks, &mut rng);

    log::debug!("Simulated {ticks} ticks of {catalog_id}");

    Ok(SimulationReport { start, end })
}

/// Formats a report as a plain-text table.
#[must_use]
pub fn render_report(report: &SimulationReport) -> String {
    let before = city_summary(&report.start.wards);
    let after = city_summary(&report.end.wards);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Catalog {} after {} ticks",
        report.end.catalog_id, report.end.tick
    );
    let _ = writeln!(
        out,
        "Average AQI {} -> {}, critical wards {} -> {}",
        before.average_aqi, after.average_aqi, before.critical_count, after.critical_count
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<8} {:<32} {:>5} {:>5} {:>7}  {}",
        "ID", "Ward", "Start", "End", "Traffic", "Category"
    );

    for (start, end) in report.start.wards.iter().zip(&report.end.wards) {
        let _ = writeln!(
            out,
            "{:<8} {:<32} {:>5} {:>5} {:>7}  {}",
            end.id,
            end.name,
            start.air_quality_index,
            end.air_quality_index,
            end.traffic_index,
            end.category()
        );
    }

    if let Some(worst) = after.most_polluted {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Most polluted: {} ({}, AQI {})",
            worst.name, worst.id, worst.air_quality_index
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_runs_repeat() {
        let a = run_simulation("delhi_ncr", 20, Some(9)).unwrap();
        let b = run_simulation("delhi_ncr", 20, Some(9)).unwrap();
        assert_eq!(a.end.wards, b.end.wards);
        assert_eq!(a.end.tick, 20);
        assert_eq!(a.start.tick, 0);
    }

    #[test]
    fn seeding_matches_the_server_config() {
        let config = SimulationConfig {
            catalog_id: "delhi_ncr".to_string(),
            seed: Some(9),
            ..SimulationConfig::default()
        };
        let definition = catalog_by_id("delhi_ncr").unwrap();
        let expected = Catalog::build(&definition, &mut config.rng());

        let report = run_simulation("delhi_ncr", 0, Some(9)).unwrap();
        assert_eq!(report.start.wards, expected.wards);
    }

    #[test]
    fn unknown_catalog_is_an_error() {
        assert!(run_simulation("nowhere", 1, Some(1)).is_err());
    }

    #[test]
    fn report_lists_every_ward() {
        let report = run_simulation("delhi_ncr", 3, Some(2)).unwrap();
        let text = render_report(&report);

        assert!(text.starts_with("Catalog delhi_ncr after 3 ticks"));
        for ward in &report.end.wards {
            assert!(text.contains(&ward.id), "{}", ward.id);
        }
        assert!(text.contains("Most polluted:"));
    }
}
