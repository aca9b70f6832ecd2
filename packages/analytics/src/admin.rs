//! Admin action list and the policy simulation lab.

use ward_air_analytics_models::{
    AdminFilter, AdminReport, AdminRow, PolicySet, PolicySimulation, RecommendedAction,
};
use ward_air_ward_models::Ward;

use crate::summary::{average_aqi, critical_count};

/// Projects the city average under `policies`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn simulate_policy(baseline_aqi: u32, policies: PolicySet) -> PolicySimulation {
    let reduction_percent = policies.reduction_percent();
    let factor = 1.0 - f64::from(reduction_percent) / 100.0;
    let simulated_aqi = (f64::from(baseline_aqi) * factor).round().max(0.0) as u32;

    PolicySimulation {
        policies,
        baseline_aqi,
        reduction_percent,
        simulated_aqi,
    }
}

/// Wards ranked by AQI, highest first, after applying `filter`.
///
/// Equal AQIs keep catalog order. Ranks are positions in the full ranking,
/// so filtering never renumbers a ward.
#[must_use]
pub fn rank_wards(wards: &[Ward], filter: AdminFilter) -> Vec<AdminRow> {
    let mut ranked: Vec<&Ward> = wards.iter().collect();
    ranked.sort_by(|a, b| b.air_quality_index.cmp(&a.air_quality_index));

    ranked
        .into_iter()
        .enumerate()
        .filter(|(_, w)| match filter {
            AdminFilter::All => true,
            AdminFilter::Critical => w.category().is_critical(),
        })
        .map(|(index, w)| {
            let category = w.category();
            AdminRow {
                rank: index + 1,
                ward_id: w.id.clone(),
                name: w.name.clone(),
                zone: w.zone.clone(),
                air_quality_index: w.air_quality_index,
                category,
                alert: category.is_critical(),
                primary_source: w.primary_sources.first().cloned(),
                traffic_index: w.traffic_index,
                action: RecommendedAction::for_category(category),
            }
        })
        .collect()
}

/// Builds the admin view payload.
#[must_use]
pub fn admin_report(wards: &[Ward], filter: AdminFilter, policies: PolicySet) -> AdminReport {
    let average = average_aqi(wards);

    AdminReport {
        filter,
        critical_count: critical_count(wards),
        average_aqi: average,
        rows: rank_wards(wards, filter),
        simulation: simulate_policy(average, policies),
    }
}
