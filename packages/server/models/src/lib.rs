#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the ward air server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the simulation types so the wire contract can evolve on its own;
//! in particular [`ApiWard`] carries the derived AQI category that the
//! core [`Ward`] never stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use ward_air_analytics_models::{
    AdminReport, CitizenAdvisory, CitySummary, MonitorCard, NewsItem, WardRef,
};
use ward_air_ward_models::{AqiCategory, Ward};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

/// Error body for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Where AI replies come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AiMode {
    /// A model provider is configured.
    Live,
    /// Replies are canned text.
    Simulated,
}

/// What the server can do, so clients can disable missing features up front.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCapabilities {
    pub ai_mode: AiMode,
    pub ai_provider: Option<String>,
    /// Whether the voice assistant should be offered.
    pub voice_assistant: bool,
    pub catalog_id: String,
    pub tick_interval_secs: f64,
}

/// A ward as returned by the API, with its derived category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiWard {
    #[serde(flatten)]
    pub ward: Ward,
    pub category: AqiCategory,
}

impl From<&Ward> for ApiWard {
    fn from(ward: &Ward) -> Self {
        Self {
            ward: ward.clone(),
            category: ward.category(),
        }
    }
}

/// The full catalog at one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCatalog {
    pub catalog_id: String,
    pub tick: u64,
    pub generated_at: DateTime<Utc>,
    pub wards: Vec<ApiWard>,
}

/// A search match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSearchHit {
    pub ward: ApiWard,
    /// Point of interest that matched, or the ward's zone.
    pub landmark: String,
}

/// Query parameters for the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Free-text query.
    pub q: Option<String>,
}

/// Query parameters for the heatmap endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeatmapParams {
    /// `AQI` (default) or `PM25`.
    pub metric: Option<String>,
    /// Centre year. Defaults to the current year.
    pub year: Option<i32>,
}

/// Query parameters for the admin endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminParams {
    /// `ALL` (default) or `CRITICAL`.
    pub filter: Option<String>,
    pub odd_even: Option<bool>,
    pub construction_ban: Option<bool>,
    pub industrial_curfew: Option<bool>,
}

/// Query parameters for the news endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsParams {
    /// `Local`, `Policy`, `Weather` or `Health`. Omit for everything.
    pub category: Option<String>,
}

/// Query parameters for the locate endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LocateParams {
    pub lat: f64,
    pub lon: f64,
}

/// Query parameters for the forecast comparison endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompareParams {
    /// Comma-separated ward ids to overlay.
    pub with: Option<String>,
}

impl CompareParams {
    /// The requested ward ids, trimmed, blanks skipped.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.with
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .collect()
    }
}

/// Body of `POST /api/ai/ask`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Reply from the AI advisor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAiReply {
    pub text: String,
    pub mode: AiMode,
}

/// Dashboard screens.
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
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum ViewMode {
    Landing,
    Dashboard,
    Trends,
    Admin,
    Citizen,
    News,
}

impl ViewMode {
    /// Returns all variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Landing,
            Self::Dashboard,
            Self::Trends,
            Self::Admin,
            Self::Citizen,
            Self::News,
        ]
    }
}

/// Headline numbers for the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingStats {
    pub ward_count: usize,
    pub average_aqi: u32,
    pub critical_count: usize,
    pub most_polluted: Option<WardRef>,
}

/// Data behind one dashboard screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", content = "data", rename_all = "UPPERCASE")]
pub enum ViewPayload {
    Landing(LandingStats),
    Dashboard {
        catalog: ApiCatalog,
        /// Card for the first ward, which the dashboard opens on.
        selected: Option<MonitorCard>,
    },
    Trends(CitySummary),
    Admin(AdminReport),
    Citizen(Vec<CitizenAdvisory>),
    News(Vec<NewsItem>),
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn view_mode_parses_any_case() {
        assert_eq!(ViewMode::from_str("ADMIN").unwrap(), ViewMode::Admin);
        assert_eq!(ViewMode::from_str("citizen").unwrap(), ViewMode::Citizen);
        assert!(ViewMode::from_str("MAP").is_err());
        assert_eq!(ViewMode::Trends.to_string(), "TRENDS");
    }

    #[test]
    fn view_payload_is_tagged() {
        let payload = ViewPayload::News(vec![]);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["view"], "NEWS");
        assert!(json["data"].as_array().unwrap().is_empty());
    }

    #[test]
    fn compare_params_split_ids() {
        let params = CompareParams {
            with: Some(" W-RH, ,W-DW,".to_string()),
        };
        assert_eq!(params.ids(), ["W-RH", "W-DW"]);
        assert!(CompareParams::default().ids().is_empty());
    }

    #[test]
    fn admin_params_use_camel_case() {
        let params: AdminParams =
            serde_json::from_str(r#"{"filter":"CRITICAL","oddEven":true}"#).unwrap();
        assert_eq!(params.filter.as_deref(), Some("CRITICAL"));
        assert_eq!(params.odd_even, Some(true));
        assert_eq!(params.construction_ban, None);
    }
}
