#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Ward catalog definition types.
//!
//! Defines the TOML schema for a ward catalog: the static ward metadata
//! entries plus the pollution profile rules used to seed each ward's
//! simulated readings.

use serde::{Deserialize, Serialize};

/// A ward catalog, deserialized from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDefinition {
    /// Unique catalog identifier (e.g., `"pan_india"`).
    pub id: String,
    /// Human-readable name (e.g., "Pan-India Metro Wards").
    pub name: String,
    /// Profile used when no city rule matches.
    #[serde(default)]
    pub defaults: ProfileDefaults,
    /// City rules, applied in order. A later match overrides an earlier one.
    #[serde(default)]
    pub profiles: Vec<CityProfile>,
    /// Name-based adjustments, applied in order after the city rules.
    #[serde(default)]
    pub modifiers: Vec<NameModifier>,
    /// Ward metadata entries, in display order.
    pub wards: Vec<WardMetadata>,
}

/// Static description of a single ward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardMetadata {
    /// Pre-assigned ward code. When absent the builder derives one from the
    /// city and the entry's position.
    pub id: Option<String>,
    /// Locality name (e.g., "Connaught Place").
    pub name: String,
    /// City the ward belongs to.
    pub city: String,
    /// Administrative zone within the city.
    pub zone: String,
    /// Extra landmarks appended to the ward's search terms.
    #[serde(default)]
    pub points_of_interest: Vec<String>,
}

/// Baseline profile for wards that match no city rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDefaults {
    pub base_aqi: u32,
    pub traffic_base: u32,
    pub sources: Vec<String>,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            base_aqi: 100,
            traffic_base: 50,
            sources: vec!["Traffic".to_string()],
        }
    }
}

/// Replaces the base AQI and pollution sources for every ward in `city`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityProfile {
    /// Exact city name to match.
    pub city: String,
    pub base_aqi: u32,
    pub sources: Vec<String>,
}

/// Adds to the base AQI and traffic of wards whose name contains any of the
/// given keywords. Matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameModifier {
    pub name_contains: Vec<String>,
    #[serde(default)]
    pub aqi_bonus: u32,
    #[serde(default)]
    pub traffic_bonus: u32,
}

impl NameModifier {
    /// Whether this modifier applies to a ward called `name`.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.name_contains
            .iter()
            .any(|keyword| name.contains(keyword.as_str()))
    }
}
