//! Payloads for each dashboard screen.

use ward_air_analytics::summary::{average_aqi, critical_count, most_polluted};
use ward_air_analytics::{admin_report, citizen_advisory, city_summary, monitor_card, news_feed};
use ward_air_analytics_models::{AdminFilter, PolicySet, WardRef};
use ward_air_server_models::{ApiCatalog, ApiWard, LandingStats, ViewMode, ViewPayload};
use ward_air_simulation::Catalog;

/// Converts a snapshot to its wire form.
pub fn api_catalog(catalog: &Catalog) -> ApiCatalog {
    ApiCatalog {
        catalog_id: catalog.catalog_id.clone(),
        tick: catalog.tick,
        generated_at: catalog.generated_at,
        wards: catalog.wards.iter().map(ApiWard::from).collect(),
    }
}

/// Everything the `mode` screen needs, computed from one snapshot.
pub fn view_payload(mode: ViewMode, catalog: &Catalog) -> ViewPayload {
    let wards = &catalog.wards;

    match mode {
        ViewMode::Landing => ViewPayload::Landing(LandingStats {
            ward_count: wards.len(),
            average_aqi: average_aqi(wards),
            critical_count: critical_count(wards),
            most_polluted: most_polluted(wards).map(WardRef::from),
        }),
        ViewMode::Dashboard => ViewPayload::Dashboard {
            catalog: api_catalog(catalog),
            selected: wards.first().map(monitor_card),
        },
        ViewMode::Trends => ViewPayload::Trends(city_summary(wards)),
        ViewMode::Admin => ViewPayload::Admin(admin_report(
            wards,
            AdminFilter::All,
            PolicySet::default(),
        )),
        ViewMode::Citizen => ViewPayload::Citizen(wards.iter().map(citizen_advisory).collect()),
        ViewMode::News => ViewPayload::News(news_feed(None)),
    }
}
