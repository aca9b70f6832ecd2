#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Result types for the dashboard analytics.
//!
//! Everything here is plain serializable data. The computations live in
//! `ward_air_analytics`.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use ward_air_ward_models::{AqiCategory, Pollutant, TrendDirection, Ward};

/// Quantity plotted on a seasonal heatmap.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum HeatmapMetric {
    /// Air quality index.
    #[default]
    Aqi,
    /// Fine particulate matter. Also accepts the `PM2.5` label.
    #[serde(alias = "PM2.5")]
    #[strum(to_string = "PM25", serialize = "PM2.5")]
    Pm25,
}

/// One month of a heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    /// Zero-based month, January is 0.
    pub month_index: u8,
    /// Short month name.
    pub month: String,
    pub value: u32,
    /// Severity label for `value` under the grid's metric.
    pub label: String,
}

/// Twelve months of one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapYear {
    pub year: i32,
    pub months: Vec<HeatmapCell>,
}

/// A five-year seasonal grid for one ward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapGrid {
    pub ward_id: String,
    pub metric: HeatmapMetric,
    /// Years in ascending order.
    pub years: Vec<HeatmapYear>,
}

/// Number of wards in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: AqiCategory,
    pub count: usize,
}

/// Short reference to a ward in summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardRef {
    pub id: String,
    pub name: String,
    pub air_quality_index: u32,
    pub category: AqiCategory,
}

impl From<&Ward> for WardRef {
    fn from(ward: &Ward) -> Self {
        Self {
            id: ward.id.clone(),
            name: ward.name.clone(),
            air_quality_index: ward.air_quality_index,
            category: ward.category(),
        }
    }
}

/// Multi-dimensional risk scores for the most polluted wards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    /// Average PM2.5 halved.
    pub respiratory: u32,
    /// Average PM10 divided by three.
    pub visibility: u32,
    /// Average NO2.
    pub toxicity: u32,
    /// Average traffic index.
    pub traffic: u32,
    /// Share of industrial sources, scaled 20..=100.
    pub industrial: u32,
}

/// City-wide overview shown on the trends view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitySummary {
    pub ward_count: usize,
    pub average_aqi: u32,
    /// One entry per category in ascending severity, zeros included.
    pub distribution: Vec<CategoryCount>,
    /// Wards rated Poor or Severe.
    pub critical_count: usize,
    pub most_polluted: Option<WardRef>,
    /// Highest AQI first. Ties keep catalog order.
    pub most_polluted_top: Vec<WardRef>,
    /// Lowest AQI first. Ties keep catalog order.
    pub cleanest_top: Vec<WardRef>,
    pub risk_profile: RiskProfile,
    /// How many wards the risk profile was averaged over.
    pub risk_sample_size: usize,
}

/// Which wards the admin table lists.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum AdminFilter {
    #[default]
    All,
    /// Only Poor and Severe wards.
    Critical,
}

/// Field response suggested for a ward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
pub enum RecommendedAction {
    #[serde(rename = "Deploy Smog Guns")]
    #[strum(serialize = "Deploy Smog Guns")]
    DeploySmogGuns,
    #[serde(rename = "Traffic Diversion")]
    #[strum(serialize = "Traffic Diversion")]
    TrafficDiversion,
    #[serde(rename = "Routine Monitor")]
    #[strum(serialize = "Routine Monitor")]
    RoutineMonitor,
}

impl RecommendedAction {
    #[must_use]
    pub const fn for_category(category: AqiCategory) -> Self {
        match category {
            AqiCategory::Severe => Self::DeploySmogGuns,
            AqiCategory::Poor => Self::TrafficDiversion,
            AqiCategory::Good | AqiCategory::Moderate => Self::RoutineMonitor,
        }
    }
}

/// One row of the admin action list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRow {
    /// One-based position by AQI, highest first.
    pub rank: usize,
    pub ward_id: String,
    pub name: String,
    pub zone: String,
    pub air_quality_index: u32,
    pub category: AqiCategory,
    pub alert: bool,
    pub primary_source: Option<String>,
    pub traffic_index: u8,
    pub action: RecommendedAction,
}

/// Emergency interventions toggled in the policy lab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySet {
    #[serde(default)]
    pub odd_even: bool,
    #[serde(default)]
    pub construction_ban: bool,
    #[serde(default)]
    pub industrial_curfew: bool,
}

impl PolicySet {
    /// AQI reduction from odd-even vehicle rationing, in percent.
    pub const ODD_EVEN_PERCENT: u32 = 12;
    /// AQI reduction from halting construction, in percent.
    pub const CONSTRUCTION_BAN_PERCENT: u32 = 8;
    /// AQI reduction from an industrial curfew, in percent.
    pub const INDUSTRIAL_CURFEW_PERCENT: u32 = 15;

    /// Combined expected reduction. Policies add up.
    #[must_use]
    pub const fn reduction_percent(self) -> u32 {
        let mut total = 0;
        if self.odd_even {
            total += Self::ODD_EVEN_PERCENT;
        }
        if self.construction_ban {
            total += Self::CONSTRUCTION_BAN_PERCENT;
        }
        if self.industrial_curfew {
            total += Self::INDUSTRIAL_CURFEW_PERCENT;
        }
        total
    }
}

/// Projected city average under a set of policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySimulation {
    pub policies: PolicySet,
    pub baseline_aqi: u32,
    pub reduction_percent: u32,
    pub simulated_aqi: u32,
}

/// Admin view payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminReport {
    pub filter: AdminFilter,
    pub critical_count: usize,
    pub average_aqi: u32,
    pub rows: Vec<AdminRow>,
    pub simulation: PolicySimulation,
}

/// Health guidance for residents of one ward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitizenAdvisory {
    pub ward_id: String,
    pub name: String,
    pub air_quality_index: u32,
    pub category: AqiCategory,
    pub advice: String,
    pub primary_sources: Vec<String>,
}

/// Snapshot of one ward with the readings the monitor card highlights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorCard {
    pub ward: Ward,
    pub category: AqiCategory,
    pub primary_pollutant: Pollutant,
    pub primary_pollutant_value: f64,
    pub trend_direction: TrendDirection,
}

/// One ward's 24-hour forecast in a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSeries {
    pub ward_id: String,
    pub name: String,
    /// AQI predicted for each of the next 24 hours.
    pub values: Vec<u32>,
}

/// A ward's forecast overlaid with the forecasts of other wards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastComparison {
    /// Hour labels `+1h` through `+24h`, one per value in every series.
    pub hours: Vec<String>,
    pub base: ForecastSeries,
    /// Compared wards in the order they were requested.
    pub others: Vec<ForecastSeries>,
}

impl From<&Ward> for ForecastSeries {
    fn from(ward: &Ward) -> Self {
        Self {
            ward_id: ward.id.clone(),
            name: ward.name.clone(),
            values: ward.forecast.to_vec(),
        }
    }
}

/// Topic of a news bulletin.
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
#[strum(ascii_case_insensitive)]
pub enum NewsCategory {
    Local,
    Policy,
    Weather,
    Health,
}

/// A news bulletin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub category: NewsCategory,
    pub location: String,
    /// Relative publication time as displayed, e.g. "2 hours ago".
    pub posted: String,
    pub source: String,
}
