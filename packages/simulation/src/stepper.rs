//! Applies one live update to every ward.
//!
//! Wards are updated independently. Each step nudges the AQI and traffic,
//! slides the trend window and recomputes the particulate readings. Weather,
//! secondary pollutants and the forecast are left as built.

use chrono::Utc;
use rand::Rng;
use ward_air_catalog::builder::{clamp_traffic, round_non_negative};
use ward_air_ward_models::{AQI_FLOOR, Ward};

use crate::Catalog;

/// Largest AQI change in one step, in either direction.
pub const AQI_DRIFT: f64 = 5.0;

/// Largest traffic index change in one step, in either direction.
pub const TRAFFIC_DRIFT: f64 = 3.0;

/// Produces the snapshot that follows `catalog`.
///
/// The input is left untouched so readers still holding it see a consistent
/// view.
pub fn step_catalog<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Catalog {
    Catalog {
        catalog_id: catalog.catalog_id.clone(),
        tick: catalog.tick + 1,
        generated_at: Utc::now(),
        wards: catalog.wards.iter().map(|w| step_ward(w, rng)).collect(),
    }
}

/// Produces the next reading for a single ward.
pub fn step_ward<R: Rng + ?Sized>(ward: &Ward, rng: &mut R) -> Ward {
    let mut next = ward.clone();

    let aqi = round_non_negative(
        f64::from(ward.air_quality_index) + rng.random_range(-AQI_DRIFT..AQI_DRIFT),
    )
    .max(AQI_FLOOR);

    next.set_air_quality_index(aqi);
    next.push_trend_sample(aqi);
    next.traffic_index = clamp_traffic(
        f64::from(ward.traffic_index) + rng.random_range(-TRAFFIC_DRIFT..TRAFFIC_DRIFT),
    );

    next
}

/// Applies `ticks` steps back to back, feeding each output into the next.
pub fn run_ticks<R: Rng + ?Sized>(catalog: &Catalog, ticks: u64, rng: &mut R) -> Catalog {
    (0..ticks).fold(catalog.clone(), |current, _| step_catalog(&current, rng))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ward_air_catalog::catalog_by_id;
    use ward_air_ward_models::{AqiCategory, PM10_RATIO, PM25_RATIO, WINDOW_LEN};

    use super::*;

    fn catalog(seed: u64) -> Catalog {
        let definition = catalog_by_id("pan_india").unwrap();
        Catalog::build(&definition, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn preserves_length_and_id_order() {
        let before = catalog(1);
        let after = step_catalog(&before, &mut StdRng::seed_from_u64(2));

        assert_eq!(after.tick, 1);
        assert_eq!(after.catalog_id, before.catalog_id);
        let ids_before: Vec<&str> = before.wards.iter().map(|w| w.id.as_str()).collect();
        let ids_after: Vec<&str> = after.wards.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids_before, ids_after);
    }

    #[test]
    fn trend_window_slides_by_one() {
        let before = catalog(3);
        let after = step_catalog(&before, &mut StdRng::seed_from_u64(4));

        for (old, new) in before.wards.iter().zip(&after.wards) {
            assert_eq!(new.trend[..WINDOW_LEN - 1], old.trend[1..]);
            assert_eq!(new.trend[WINDOW_LEN - 1], new.air_quality_index);
        }
    }

    #[test]
    fn only_live_fields_change() {
        let before = catalog(5);
        let after = step_catalog(&before, &mut StdRng::seed_from_u64(6));

        for (old, new) in before.wards.iter().zip(&after.wards) {
            assert_eq!(new.id, old.id);
            assert_eq!(new.name, old.name);
            assert_eq!(new.zone, old.zone);
            assert_eq!(new.population, old.population);
            assert_eq!(new.primary_sources, old.primary_sources);
            assert_eq!(new.points_of_interest, old.points_of_interest);
            assert_eq!(new.weather, old.weather);
            assert_eq!(new.active_construction_sites, old.active_construction_sites);
            assert_eq!(new.forecast, old.forecast);
            assert_eq!(new.path, old.path);
            assert_eq!(new.center, old.center);
            assert_eq!(new.pollutant_breakdown.no2, old.pollutant_breakdown.no2);
            assert_eq!(new.pollutant_breakdown.o3, old.pollutant_breakdown.o3);
            assert!((new.pollutant_breakdown.co - old.pollutant_breakdown.co).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn deltas_stay_small() {
        let before = catalog(7);
        let after = step_catalog(&before, &mut StdRng::seed_from_u64(8));

        for (old, new) in before.wards.iter().zip(&after.wards) {
            assert!(new.air_quality_index.abs_diff(old.air_quality_index) <= 5);
            assert!(new.traffic_index.abs_diff(old.traffic_index) <= 3);
        }
    }

    #[test]
    fn derived_fields_follow_new_aqi() {
        let after = run_ticks(&catalog(9), 50, &mut StdRng::seed_from_u64(10));

        for ward in &after.wards {
            let aqi = f64::from(ward.air_quality_index);
            assert_eq!(ward.category(), AqiCategory::from_aqi(ward.air_quality_index));
            assert_eq!(ward.pollutant_breakdown.pm25, round_non_negative(aqi * PM25_RATIO));
            assert_eq!(ward.pollutant_breakdown.pm10, round_non_negative(aqi * PM10_RATIO));
        }
    }

    #[test]
    fn previous_snapshot_is_not_mutated() {
        let before = catalog(11);
        let copy = before.clone();
        let _ = step_catalog(&before, &mut StdRng::seed_from_u64(12));
        assert_eq!(before, copy);
    }

    #[test]
    fn ten_thousand_steps_stay_in_range() {
        let mut ward = catalog(13).wards.swap_remove(3);
        let mut rng = StdRng::seed_from_u64(14);

        ward.traffic_index = 99;
        ward.set_air_quality_index(22);

        for _ in 0..10_000 {
            ward = step_ward(&ward, &mut rng);
            assert!(ward.traffic_index <= 100);
            assert!(ward.air_quality_index >= AQI_FLOOR);
            assert_eq!(ward.trend.len(), WINDOW_LEN);
            assert_eq!(ward.forecast.len(), WINDOW_LEN);
        }
    }

    #[test]
    fn run_ticks_counts_steps() {
        let start = catalog(15);
        let end = run_ticks(&start, 12, &mut StdRng::seed_from_u64(16));
        assert_eq!(end.tick, 12);
        assert_eq!(end.wards.len(), start.wards.len());
    }
}
