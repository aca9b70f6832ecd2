//! Per-ward views for residents.

use ward_air_analytics_models::{CitizenAdvisory, MonitorCard};
use ward_air_ward_models::Ward;

/// Health guidance for the ward's current category.
#[must_use]
pub fn citizen_advisory(ward: &Ward) -> CitizenAdvisory {
    let category = ward.category();

    CitizenAdvisory {
        ward_id: ward.id.clone(),
        name: ward.name.clone(),
        air_quality_index: ward.air_quality_index,
        category,
        advice: category.health_advice().to_string(),
        primary_sources: ward.primary_sources.clone(),
    }
}

/// The live monitor card for a ward.
#[must_use]
pub fn monitor_card(ward: &Ward) -> MonitorCard {
    let (primary_pollutant, primary_pollutant_value) = ward.pollutant_breakdown.primary();

    MonitorCard {
        ward: ward.clone(),
        category: ward.category(),
        primary_pollutant,
        primary_pollutant_value,
        trend_direction: ward.trend_direction(),
    }
}

#[cfg(test)]
mod tests {
    use ward_air_ward_models::{AqiCategory, Pollutant, TrendDirection};

    use crate::test_support::sample_ward;

    use super::*;

    #[test]
    fn advisory_matches_category() {
        let advisory = citizen_advisory(&sample_ward("A", 260));
        assert_eq!(advisory.category, AqiCategory::Severe);
        assert!(advisory.advice.starts_with("Avoid all outdoor physical activities"));
        assert_eq!(advisory.primary_sources, vec!["Traffic".to_string()]);

        let advisory = citizen_advisory(&sample_ward("B", 45));
        assert_eq!(advisory.category, AqiCategory::Good);
        assert!(advisory.advice.contains("satisfactory"));
    }

    #[test]
    fn card_highlights_pm10_for_high_aqi() {
        let mut ward = sample_ward("A", 250);
        ward.trend[0] = 200;

        let card = monitor_card(&ward);
        assert_eq!(card.primary_pollutant, Pollutant::Pm10);
        assert!((card.primary_pollutant_value - 200.0).abs() < f64::EPSILON);
        assert_eq!(card.trend_direction, TrendDirection::Rising);
        assert_eq!(card.category, AqiCategory::Severe);
    }
}
