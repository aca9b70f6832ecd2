//! City-wide aggregates for the trends view.

use ward_air_analytics_models::{CategoryCount, CitySummary, RiskProfile, WardRef};
use ward_air_ward_models::{AqiCategory, Ward};

/// Wards above this AQI feed the risk profile.
pub const RISK_AQI_THRESHOLD: u32 = 200;

/// Length of the most polluted and cleanest ward lists.
pub const TOP_WARDS: usize = 5;

/// Industrial load score for a ward with an industrial source.
const INDUSTRIAL_LOAD: f64 = 100.0;

/// Industrial load score for any other ward.
const BACKGROUND_LOAD: f64 = 20.0;

/// Rounded mean AQI, or 0 for no wards.
#[must_use]
pub fn average_aqi(wards: &[Ward]) -> u32 {
    rounded_mean(wards, |w| f64::from(w.air_quality_index))
}

/// Number of wards rated Poor or Severe.
#[must_use]
pub fn critical_count(wards: &[Ward]) -> usize {
    wards.iter().filter(|w| w.category().is_critical()).count()
}

/// Ward counts for every category, zeros included.
#[must_use]
pub fn category_distribution(wards: &[Ward]) -> Vec<CategoryCount> {
    AqiCategory::all()
        .iter()
        .map(|&category| CategoryCount {
            category,
            count: wards.iter().filter(|w| w.category() == category).count(),
        })
        .collect()
}

/// The ward with the highest AQI. The earliest ward wins ties.
#[must_use]
pub fn most_polluted(wards: &[Ward]) -> Option<&Ward> {
    wards.iter().reduce(|best, w| {
        if w.air_quality_index > best.air_quality_index {
            w
        } else {
            best
        }
    })
}

/// Up to `limit` wards by descending AQI. The sort is stable, so tied
/// wards keep catalog order.
#[must_use]
pub fn most_polluted_top(wards: &[Ward], limit: usize) -> Vec<&Ward> {
    let mut ranked: Vec<&Ward> = wards.iter().collect();
    ranked.sort_by(|a, b| b.air_quality_index.cmp(&a.air_quality_index));
    ranked.truncate(limit);
    ranked
}

/// Up to `limit` wards by ascending AQI, ties in catalog order.
#[must_use]
pub fn cleanest_top(wards: &[Ward], limit: usize) -> Vec<&Ward> {
    let mut ranked: Vec<&Ward> = wards.iter().collect();
    ranked.sort_by_key(|w| w.air_quality_index);
    ranked.truncate(limit);
    ranked
}

/// Risk scores averaged over the wards above [`RISK_AQI_THRESHOLD`], or
/// over every ward when none is that bad.
///
/// Returns the profile and the number of wards it covers.
#[must_use]
pub fn risk_profile(wards: &[Ward]) -> (RiskProfile, usize) {
    let severe: Vec<Ward> = wards
        .iter()
        .filter(|w| w.air_quality_index > RISK_AQI_THRESHOLD)
        .cloned()
        .collect();
    let sample = if severe.is_empty() { wards } else { &severe };

    let profile = RiskProfile {
        respiratory: rounded_mean(sample, |w| f64::from(w.pollutant_breakdown.pm25) / 2.0),
        visibility: rounded_mean(sample, |w| f64::from(w.pollutant_breakdown.pm10) / 3.0),
        toxicity: rounded_mean(sample, |w| f64::from(w.pollutant_breakdown.no2)),
        traffic: rounded_mean(sample, |w| f64::from(w.traffic_index)),
        industrial: rounded_mean(sample, |w| {
            if w.has_source("Industrial") {
                INDUSTRIAL_LOAD
            } else {
                BACKGROUND_LOAD
            }
        }),
    };

    (profile, sample.len())
}

/// Builds the trends view overview.
#[must_use]
pub fn city_summary(wards: &[Ward]) -> CitySummary {
    let (risk_profile, risk_sample_size) = risk_profile(wards);

    CitySummary {
        ward_count: wards.len(),
        average_aqi: average_aqi(wards),
        distribution: category_distribution(wards),
        critical_count: critical_count(wards),
        most_polluted: most_polluted(wards).map(WardRef::from),
        most_polluted_top: most_polluted_top(wards, TOP_WARDS)
            .into_iter()
            .map(WardRef::from)
            .collect(),
        cleanest_top: cleanest_top(wards, TOP_WARDS)
            .into_iter()
            .map(WardRef::from)
            .collect(),
        risk_profile,
        risk_sample_size,
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn rounded_mean(wards: &[Ward], value: impl Fn(&Ward) -> f64) -> u32 {
    if wards.is_empty() {
        return 0;
    }
    let total: f64 = wards.iter().map(value).sum();
    (total / wards.len() as f64).round().max(0.0) as u32
}
