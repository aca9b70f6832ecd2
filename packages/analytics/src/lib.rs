#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Dashboard analytics over a set of wards.
//!
//! Every function here is pure: it takes ward snapshots and returns plain
//! data from `ward_air_analytics_models`. Nothing holds state between
//! calls.

pub mod admin;
pub mod advisory;
pub mod compare;
pub mod heatmap;
pub mod news;
pub mod summary;

pub use admin::{admin_report, rank_wards, simulate_policy};
pub use advisory::{citizen_advisory, monitor_card};
pub use compare::compare_forecasts;
pub use heatmap::{bucket_label, generate_heatmap};
pub use news::{all_news, news_feed};
pub use summary::city_summary;

use thiserror::Error;

/// Errors from loading analytics data or resolving ward ids.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Embedded or supplied TOML was malformed.
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A requested ward id is not in the catalog.
    #[error("Unknown ward: {id}")]
    UnknownWard { id: String },
}

#[cfg(test)]
pub(crate) mod test_support {
    use ward_air_ward_models::{
        CompassDirection, Point, PollutantBreakdown, WINDOW_LEN, Ward, Weather,
    };

    pub fn ward_with(id: &str, aqi: u32, traffic: u8, sources: &[&str]) -> Ward {
        let mut ward = Ward {
            id: id.to_string(),
            name: format!("Ward {id}"),
            zone: "Central".to_string(),
            population: 50_000,
            primary_sources: sources.iter().map(ToString::to_string).collect(),
            points_of_interest: vec![],
            air_quality_index: aqi,
            pollutant_breakdown: PollutantBreakdown {
                pm25: 0,
                pm10: 0,
                no2: 40,
                co: 1.0,
                o3: 30,
            },
            weather: Weather {
                temperature: 25.0,
                humidity: 50.0,
                wind_speed: 8.0,
                direction: CompassDirection::N,
            },
            traffic_index: traffic,
            active_construction_sites: 2,
            trend: [aqi; WINDOW_LEN],
            forecast: [aqi; WINDOW_LEN],
            path: String::new(),
            center: Point { x: 0.0, y: 0.0 },
        };
        ward.set_air_quality_index(aqi);
        ward
    }

    pub fn sample_ward(id: &str, aqi: u32) -> Ward {
        ward_with(id, aqi, 50, &["Traffic"])
    }
}
