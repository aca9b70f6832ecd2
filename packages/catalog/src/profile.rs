//! Pollution profile resolution for ward metadata entries.

use ward_air_catalog_models::{CatalogDefinition, WardMetadata};

/// Baseline readings the builder adds noise around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub base_aqi: u32,
    pub traffic_base: u32,
    pub sources: Vec<String>,
}

/// Resolves the profile for `meta` by applying the catalog's rules in order.
///
/// Starts from the catalog defaults, then every matching city rule replaces
/// the base AQI and sources (so the last match wins), then every matching
/// name modifier adds its bonuses.
#[must_use]
pub fn resolve_profile(definition: &CatalogDefinition, meta: &WardMetadata) -> Profile {
    let mut profile = Profile {
        base_aqi: definition.defaults.base_aqi,
        traffic_base: definition.defaults.traffic_base,
        sources: definition.defaults.sources.clone(),
    };

    for rule in definition.profiles.iter().filter(|r| r.city == meta.city) {
        profile.base_aqi = rule.base_aqi;
        profile.sources.clone_from(&rule.sources);
    }

    for modifier in definition.modifiers.iter().filter(|m| m.matches(&meta.name)) {
        profile.base_aqi += modifier.aqi_bonus;
        profile.traffic_base += modifier.traffic_bonus;
    }

    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use ward_air_catalog_models::{CityProfile, NameModifier, ProfileDefaults};

    fn definition() -> CatalogDefinition {
        CatalogDefinition {
            id: "test".to_string(),
            name: "Test".to_string(),
            defaults: ProfileDefaults::default(),
            profiles: vec![
                CityProfile {
                    city: "Delhi".to_string(),
                    base_aqi: 250,
                    sources: vec!["Vehicular".to_string(), "Stubble Burning".to_string()],
                },
                CityProfile {
                    city: "Delhi".to_string(),
                    base_aqi: 260,
                    sources: vec!["Vehicular".to_string()],
                },
            ],
            modifiers: vec![NameModifier {
                name_contains: vec!["Industrial".to_string(), "Tech".to_string()],
                aqi_bonus: 50,
                traffic_bonus: 30,
            }],
            wards: Vec::new(),
        }
    }

    fn meta(name: &str, city: &str) -> WardMetadata {
        WardMetadata {
            id: None,
            name: name.to_string(),
            city: city.to_string(),
            zone: "Central".to_string(),
            points_of_interest: Vec::new(),
        }
    }

    #[test]
    fn unmatched_entry_uses_defaults() {
        let profile = resolve_profile(&definition(), &meta("Adyar", "Chennai"));
        assert_eq!(profile.base_aqi, 100);
        assert_eq!(profile.traffic_base, 50);
        assert_eq!(profile.sources, vec!["Traffic".to_string()]);
    }

    #[test]
    fn later_city_rule_overrides_earlier() {
        let profile = resolve_profile(&definition(), &meta("Rohini", "Delhi"));
        assert_eq!(profile.base_aqi, 260);
        assert_eq!(profile.sources, vec!["Vehicular".to_string()]);
    }

    #[test]
    fn name_modifier_stacks_on_city_rule() {
        let profile = resolve_profile(&definition(), &meta("Okhla Industrial Area", "Delhi"));
        assert_eq!(profile.base_aqi, 310);
        assert_eq!(profile.traffic_base, 80);
    }

    #[test]
    fn name_modifier_is_case_sensitive() {
        let profile = resolve_profile(&definition(), &meta("Hitech City", "Hyderabad"));
        assert_eq!(profile.base_aqi, 100);
        assert_eq!(profile.traffic_base, 50);

        let profile = resolve_profile(&definition(), &meta("Tech Park", "Hyderabad"));
        assert_eq!(profile.base_aqi, 150);
        assert_eq!(profile.traffic_base, 80);
    }
}
