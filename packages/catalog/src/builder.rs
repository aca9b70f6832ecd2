//! Builds the initial ward catalog from a catalog definition.

use rand::Rng;
use ward_air_catalog_models::{CatalogDefinition, WardMetadata};
use ward_air_ward_models::{
    AQI_FLOOR, CompassDirection, PollutantBreakdown, WINDOW_LEN, Ward, Weather,
};

use crate::geometry::grid_cell;
use crate::profile::{Profile, resolve_profile};

/// Spread of the initial AQI around the profile baseline.
const AQI_SPREAD: f64 = 30.0;

/// Spread of each trend and forecast sample around the initial AQI.
const SAMPLE_SPREAD: f64 = 20.0;

/// Offset added to an entry's position when deriving its ward code.
const CODE_BASE: usize = 10;

/// Landmarks every ward is searchable by, after its zone.
const COMMON_LANDMARKS: [&str; 2] = ["City Center", "Main Market"];

/// Builds one ward per metadata entry, preserving order.
pub fn build_wards<R: Rng + ?Sized>(definition: &CatalogDefinition, rng: &mut R) -> Vec<Ward> {
    let wards: Vec<Ward> = definition
        .wards
        .iter()
        .enumerate()
        .map(|(index, meta)| {
            let profile = resolve_profile(definition, meta);
            build_ward(index, meta, &profile, rng)
        })
        .collect();

    log::debug!(
        "Built {} wards from catalog {}",
        wards.len(),
        definition.id
    );

    wards
}

/// Returns the ward code for the entry at `index`.
///
/// Uses the entry's pre-assigned id when present, otherwise the first three
/// letters of the city in upper case followed by the position plus ten.
#[must_use]
pub fn ward_code(index: usize, meta: &WardMetadata) -> String {
    meta.id.clone().unwrap_or_else(|| {
        let prefix: String = meta.city.chars().take(3).collect();
        format!("{}-{}", prefix.to_uppercase(), index + CODE_BASE)
    })
}

fn build_ward<R: Rng + ?Sized>(
    index: usize,
    meta: &WardMetadata,
    profile: &Profile,
    rng: &mut R,
) -> Ward {
    let aqi = round_non_negative(
        f64::from(profile.base_aqi) + rng.random_range(-AQI_SPREAD..AQI_SPREAD),
    )
    .max(AQI_FLOOR);

    let mut pollutant_breakdown = PollutantBreakdown {
        pm25: 0,
        pm10: 0,
        no2: round_non_negative(rng.random_range(10.0..=90.0)),
        co: (rng.random_range(0.0..2.0_f64) * 10.0).round() / 10.0,
        o3: round_non_negative(rng.random_range(0.0..=50.0)),
    };
    pollutant_breakdown.apply_aqi(aqi);

    let directions = CompassDirection::all();
    let weather = Weather {
        temperature: rng.random_range(28.0..33.0),
        humidity: rng.random_range(60.0..80.0),
        wind_speed: rng.random_range(5.0..15.0),
        direction: directions[rng.random_range(0..directions.len())],
    };

    let traffic_index = clamp_traffic(
        f64::from(profile.traffic_base) + rng.random_range(-5.0..15.0),
    );

    let mut points_of_interest = vec![meta.zone.clone()];
    points_of_interest.extend(COMMON_LANDMARKS.iter().map(ToString::to_string));
    points_of_interest.extend(meta.points_of_interest.iter().cloned());

    let cell = grid_cell(index);

    Ward {
        id: ward_code(index, meta),
        name: format!("{}, {}", meta.name, meta.city),
        zone: meta.zone.clone(),
        population: rng.random_range(50_000..550_000),
        primary_sources: profile.sources.clone(),
        points_of_interest,
        air_quality_index: aqi,
        pollutant_breakdown,
        weather,
        traffic_index,
        active_construction_sites: rng.random_range(0..5),
        trend: noisy_window(aqi, rng),
        forecast: noisy_window(aqi, rng),
        path: cell.svg_path(),
        center: cell.center,
    }
}

/// Independent samples around `aqi`, not a smooth curve.
fn noisy_window<R: Rng + ?Sized>(aqi: u32, rng: &mut R) -> [u32; WINDOW_LEN] {
    std::array::from_fn(|_| {
        round_non_negative(f64::from(aqi) + rng.random_range(-SAMPLE_SPREAD..SAMPLE_SPREAD))
    })
}

/// Rounds to the nearest integer, clamping negatives to zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_non_negative(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Rounds and clamps a traffic reading into 0-100.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_traffic(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ward_air_ward_models::AqiCategory;

    use super::*;
    use crate::catalog_by_id;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn builds_one_ward_per_entry_in_order() {
        let definition = catalog_by_id("pan_india").unwrap();
        let wards = build_wards(&definition, &mut rng());

        assert_eq!(wards.len(), definition.wards.len());
        for (ward, meta) in wards.iter().zip(&definition.wards) {
            assert_eq!(ward.name, format!("{}, {}", meta.name, meta.city));
            assert_eq!(ward.zone, meta.zone);
        }
    }

    #[test]
    fn every_ward_is_well_formed() {
        for definition in crate::all_catalogs() {
            for seed in 0..20 {
                let wards = build_wards(&definition, &mut StdRng::seed_from_u64(seed));
                for ward in &wards {
                    assert_eq!(ward.category(), AqiCategory::from_aqi(ward.air_quality_index));
                    assert!(ward.air_quality_index >= AQI_FLOOR);
                    assert!(ward.traffic_index <= 100);
                    assert_eq!(ward.trend.len(), WINDOW_LEN);
                    assert_eq!(ward.forecast.len(), WINDOW_LEN);
                    assert!((50_000..550_000).contains(&ward.population));
                    assert!(ward.active_construction_sites < 5);
                    assert!((0.0..=2.0).contains(&ward.pollutant_breakdown.co));
                }
            }
        }
    }

    #[test]
    fn particulates_are_fractions_of_aqi() {
        let definition = catalog_by_id("pan_india").unwrap();
        for ward in build_wards(&definition, &mut rng()) {
            let aqi = f64::from(ward.air_quality_index);
            assert_eq!(ward.pollutant_breakdown.pm25, round_non_negative(aqi * 0.55));
            assert_eq!(ward.pollutant_breakdown.pm10, round_non_negative(aqi * 0.8));
        }
    }

    #[test]
    fn samples_stay_near_initial_aqi() {
        let definition = catalog_by_id("pan_india").unwrap();
        for ward in build_wards(&definition, &mut rng()) {
            for sample in ward.trend.iter().chain(ward.forecast.iter()) {
                assert!(sample.abs_diff(ward.air_quality_index) <= 20);
            }
        }
    }

    #[test]
    fn derived_codes_use_city_prefix_and_position() {
        let definition = catalog_by_id("pan_india").unwrap();
        let wards = build_wards(&definition, &mut rng());

        assert_eq!(wards[0].id, "NEW-10");
        assert_eq!(wards[1].id, "DEL-11");
        assert_eq!(wards[5].id, "MUM-15");
    }

    #[test]
    fn nine_entry_catalog_scenario() {
        let definition = catalog_by_id("delhi_ncr").unwrap();
        let wards = build_wards(&definition, &mut rng());

        assert_eq!(wards.len(), 9);

        let ids: BTreeSet<&str> = wards.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids.len(), 9);
        assert_eq!(wards[0].id, "W-CP");

        for pair in wards[..5].windows(2) {
            assert!(pair[1].center.x > pair[0].center.x);
        }
        assert!(wards[5].center.x < wards[4].center.x);
        assert!(wards[5].center.y > wards[4].center.y);
    }

    #[test]
    fn geometry_ignores_random_source() {
        let definition = catalog_by_id("delhi_ncr").unwrap();
        let a = build_wards(&definition, &mut StdRng::seed_from_u64(1));
        let b = build_wards(&definition, &mut StdRng::seed_from_u64(2));

        for (left, right) in a.iter().zip(&b) {
            assert_eq!(left.path, right.path);
            assert_eq!(left.center, right.center);
        }
    }

    #[test]
    fn seeded_builds_are_reproducible() {
        let definition = catalog_by_id("pan_india").unwrap();
        let a = build_wards(&definition, &mut StdRng::seed_from_u64(99));
        let b = build_wards(&definition, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn points_of_interest_start_with_zone() {
        let definition = catalog_by_id("pan_india").unwrap();
        let wards = build_wards(&definition, &mut rng());

        assert_eq!(
            wards[0].points_of_interest,
            vec![
                "North".to_string(),
                "City Center".to_string(),
                "Main Market".to_string(),
                "Inner Circle".to_string(),
                "Janpath".to_string(),
            ]
        );
    }

    #[test]
    fn traffic_clamps_at_both_ends() {
        assert_eq!(clamp_traffic(-4.2), 0);
        assert_eq!(clamp_traffic(100.4), 100);
        assert_eq!(clamp_traffic(131.0), 100);
        assert_eq!(clamp_traffic(42.5), 43);
    }
}
