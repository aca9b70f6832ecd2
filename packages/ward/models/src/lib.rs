#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Ward record, AQI category and pollutant types.
//!
//! A [`Ward`] is the atomic administrative unit the simulation tracks air
//! quality for. Its [`AqiCategory`] is never stored: it is derived from the
//! air quality index every time it is read, so the two cannot disagree.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Length of the rolling trend window and of the forecast, in hourly samples.
pub const WINDOW_LEN: usize = 24;

/// Lowest AQI the simulation ever reports for a ward.
pub const AQI_FLOOR: u32 = 20;

/// Fraction of the AQI reported as fine particulate matter (PM2.5).
pub const PM25_RATIO: f64 = 0.55;

/// Fraction of the AQI reported as coarse particulate matter (PM10).
pub const PM10_RATIO: f64 = 0.8;

/// Severity bucket for an air quality index.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum AqiCategory {
    /// AQI 0-50
    Good,
    /// AQI 51-100
    Moderate,
    /// AQI 101-200
    Poor,
    /// AQI above 200
    Severe,
}

impl AqiCategory {
    /// Buckets an AQI value. Upper bounds are inclusive.
    #[must_use]
    pub const fn from_aqi(aqi: u32) -> Self {
        match aqi {
            0..=50 => Self::Good,
            51..=100 => Self::Moderate,
            101..=200 => Self::Poor,
            _ => Self::Severe,
        }
    }

    /// Whether this category warrants an alert on the admin view.
    #[must_use]
    pub const fn is_critical(self) -> bool {
        matches!(self, Self::Poor | Self::Severe)
    }

    /// Public health guidance for residents.
    #[must_use]
    pub const fn health_advice(self) -> &'static str {
        match self {
            Self::Severe => {
                "Avoid all outdoor physical activities. Wear N95 masks if stepping out is necessary."
            }
            Self::Poor => {
                "Reduce prolonged or heavy exertion. Take more breaks during all outdoor activities."
            }
            Self::Moderate => {
                "Unusually sensitive people should consider reducing prolonged or heavy exertion."
            }
            Self::Good => {
                "Air quality is considered satisfactory, and air pollution poses little or no risk."
            }
        }
    }

    /// Returns all variants in ascending severity.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Good, Self::Moderate, Self::Poor, Self::Severe]
    }
}

/// Eight-point compass direction for wind.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum CompassDirection {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl CompassDirection {
    /// Returns all variants clockwise from north.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::N,
            Self::Ne,
            Self::E,
            Self::Se,
            Self::S,
            Self::Sw,
            Self::W,
            Self::Nw,
        ]
    }
}

/// Named pollutant in a [`PollutantBreakdown`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Pollutant {
    #[serde(rename = "PM2.5")]
    #[strum(serialize = "PM2.5")]
    Pm25,
    #[serde(rename = "PM10")]
    #[strum(serialize = "PM10")]
    Pm10,
    #[serde(rename = "NO2")]
    #[strum(serialize = "NO2")]
    No2,
    #[serde(rename = "CO")]
    #[strum(serialize = "CO")]
    Co,
    #[serde(rename = "O3")]
    #[strum(serialize = "O3")]
    O3,
}

/// Per-pollutant concentrations for a ward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollutantBreakdown {
    /// Fine particulate matter, derived from the AQI.
    pub pm25: u32,
    /// Coarse particulate matter, derived from the AQI.
    pub pm10: u32,
    /// Nitrogen dioxide.
    pub no2: u32,
    /// Carbon monoxide, one decimal place.
    pub co: f64,
    /// Ozone.
    pub o3: u32,
}

impl PollutantBreakdown {
    /// Recomputes the particulate fields from an AQI value.
    pub fn apply_aqi(&mut self, aqi: u32) {
        self.pm25 = scaled(aqi, PM25_RATIO);
        self.pm10 = scaled(aqi, PM10_RATIO);
    }

    /// Returns the pollutant with the highest reading.
    ///
    /// Ties resolve to the earliest pollutant in PM2.5, PM10, NO2, CO, O3
    /// order.
    #[must_use]
    pub fn primary(&self) -> (Pollutant, f64) {
        let readings = [
            (Pollutant::Pm25, f64::from(self.pm25)),
            (Pollutant::Pm10, f64::from(self.pm10)),
            (Pollutant::No2, f64::from(self.no2)),
            (Pollutant::Co, self.co),
            (Pollutant::O3, f64::from(self.o3)),
        ];

        readings
            .into_iter()
            .fold((Pollutant::Pm25, f64::MIN), |best, current| {
                if current.1 > best.1 { current } else { best }
            })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled(aqi: u32, ratio: f64) -> u32 {
    (f64::from(aqi) * ratio).round() as u32
}

/// Local weather conditions at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Kilometres per hour.
    pub wind_speed: f64,
    pub direction: CompassDirection,
}

/// A point in dashboard map coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Direction of the AQI over the trend window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    Rising,
    Falling,
    Steady,
}

/// A municipal ward and its current simulated readings.
///
/// Only the simulation stepper changes a ward after creation, and it must
/// go through [`Ward::set_air_quality_index`] so the particulate fields
/// follow the AQI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ward {
    /// Short code, unique within a catalog.
    pub id: String,
    pub name: String,
    pub zone: String,
    pub population: u32,
    pub primary_sources: Vec<String>,
    /// Landmarks used only for search matching.
    pub points_of_interest: Vec<String>,
    pub air_quality_index: u32,
    pub pollutant_breakdown: PollutantBreakdown,
    pub weather: Weather,
    /// 0-100.
    pub traffic_index: u8,
    pub active_construction_sites: u32,
    /// Past AQI samples, oldest first.
    pub trend: [u32; WINDOW_LEN],
    /// Predicted AQI for the next hours, nearest first.
    pub forecast: [u32; WINDOW_LEN],
    /// SVG path outlining the ward on the dashboard map.
    pub path: String,
    pub center: Point,
}

impl Ward {
    /// The severity bucket of the current AQI.
    #[must_use]
    pub const fn category(&self) -> AqiCategory {
        AqiCategory::from_aqi(self.air_quality_index)
    }

    /// Sets the AQI and recomputes the fields derived from it.
    pub fn set_air_quality_index(&mut self, aqi: u32) {
        self.air_quality_index = aqi;
        self.pollutant_breakdown.apply_aqi(aqi);
    }

    /// Drops the oldest trend sample and appends `sample`.
    pub fn push_trend_sample(&mut self, sample: u32) {
        self.trend.rotate_left(1);
        self.trend[WINDOW_LEN - 1] = sample;
    }

    /// Compares the newest trend sample with the oldest.
    #[must_use]
    pub const fn trend_direction(&self) -> TrendDirection {
        let first = self.trend[0];
        let last = self.trend[WINDOW_LEN - 1];
        if last > first {
            TrendDirection::Rising
        } else if last < first {
            TrendDirection::Falling
        } else {
            TrendDirection::Steady
        }
    }

    /// Whether `source` is one of the primary source labels, compared whole.
    #[must_use]
    pub fn has_source(&self, source: &str) -> bool {
        self.primary_sources.iter().any(|s| s == source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ward(aqi: u32) -> Ward {
        let mut ward = Ward {
            id: "DEL-10".to_string(),
            name: "Rohini, Delhi".to_string(),
            zone: "North West".to_string(),
            population: 120_000,
            primary_sources: vec!["Vehicular".to_string(), "Stubble Burning".to_string()],
            points_of_interest: vec!["North West".to_string()],
            air_quality_index: 0,
            pollutant_breakdown: PollutantBreakdown {
                pm25: 0,
                pm10: 0,
                no2: 40,
                co: 1.2,
                o3: 20,
            },
            weather: Weather {
                temperature: 30.0,
                humidity: 65.0,
                wind_speed: 8.0,
                direction: CompassDirection::Nw,
            },
            traffic_index: 55,
            active_construction_sites: 2,
            trend: [aqi; WINDOW_LEN],
            forecast: [aqi; WINDOW_LEN],
            path: String::new(),
            center: Point { x: 50.0, y: 50.0 },
        };
        ward.set_air_quality_index(aqi);
        ward
    }

    #[test]
    fn category_thresholds_are_inclusive() {
        assert_eq!(AqiCategory::from_aqi(0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(50), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(51), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_aqi(100), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_aqi(101), AqiCategory::Poor);
        assert_eq!(AqiCategory::from_aqi(200), AqiCategory::Poor);
        assert_eq!(AqiCategory::from_aqi(201), AqiCategory::Severe);
    }

    #[test]
    fn category_follows_aqi_changes() {
        let mut ward = sample_ward(205);
        assert_eq!(ward.category(), AqiCategory::Severe);

        ward.set_air_quality_index(200);
        assert_eq!(ward.category(), AqiCategory::Poor);
    }

    #[test]
    fn particulates_track_aqi() {
        let mut ward = sample_ward(100);
        assert_eq!(ward.pollutant_breakdown.pm25, 55);
        assert_eq!(ward.pollutant_breakdown.pm10, 80);

        ward.set_air_quality_index(250);
        assert_eq!(ward.pollutant_breakdown.pm25, 138);
        assert_eq!(ward.pollutant_breakdown.pm10, 200);
        assert_eq!(ward.pollutant_breakdown.no2, 40);
    }

    #[test]
    fn trend_window_slides() {
        let mut ward = sample_ward(100);
        ward.trend = std::array::from_fn(|i| u32::try_from(i).unwrap());

        ward.push_trend_sample(999);

        assert_eq!(ward.trend[0], 1);
        assert_eq!(ward.trend[22], 23);
        assert_eq!(ward.trend[23], 999);
        assert_eq!(ward.trend_direction(), TrendDirection::Rising);
    }

    #[test]
    fn primary_pollutant_prefers_highest_reading() {
        let ward = sample_ward(100);
        let (pollutant, value) = ward.pollutant_breakdown.primary();
        assert_eq!(pollutant, Pollutant::Pm10);
        assert!((value - 80.0).abs() < f64::EPSILON);
        assert_eq!(pollutant.to_string(), "PM10");
    }

    #[test]
    fn ward_serializes_camel_case() {
        let ward = sample_ward(120);
        let json = serde_json::to_value(&ward).unwrap();
        assert_eq!(json["airQualityIndex"], 120);
        assert_eq!(json["trafficIndex"], 55);
        assert_eq!(json["weather"]["direction"], "NW");
        assert_eq!(json["trend"].as_array().unwrap().len(), WINDOW_LEN);
        assert!(json.get("category").is_none());
    }

    #[test]
    fn source_labels_compare_whole() {
        let mut ward = sample_ward(120);
        ward.primary_sources = vec!["Industrial Exhaust".to_string()];
        assert!(!ward.has_source("Industrial"));
        assert!(ward.has_source("Industrial Exhaust"));
    }
}
