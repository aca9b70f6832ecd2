//! Catalog registry: loads ward catalogs from embedded TOML configs.
//!
//! Each `.toml` file in `packages/catalog/catalogs/` is baked into the
//! binary at compile time via [`include_str!`]. Adding a catalog means
//! creating a TOML file and adding it to the list below.

use std::collections::BTreeSet;

use ward_air_catalog_models::CatalogDefinition;

use crate::CatalogError;
use crate::builder::ward_code;

/// Catalog used when none is configured.
pub const DEFAULT_CATALOG: &str = "pan_india";

/// TOML configs embedded at compile time.
const CATALOG_TOMLS: &[(&str, &str)] = &[
    ("pan_india", include_str!("../catalogs/pan_india.toml")),
    ("delhi_ncr", include_str!("../catalogs/delhi_ncr.toml")),
];

/// Total number of embedded catalogs (used in tests).
#[cfg(test)]
const EXPECTED_CATALOG_COUNT: usize = 2;

/// Parses and validates a [`CatalogDefinition`] from a TOML string.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the TOML is malformed,
/// [`CatalogError::Empty`] if it lists no wards, or
/// [`CatalogError::DuplicateWardId`] if two entries resolve to the same
/// ward code.
pub fn parse_catalog_toml(toml_str: &str) -> Result<CatalogDefinition, CatalogError> {
    let definition: CatalogDefinition = toml::de::from_str(toml_str)?;

    if definition.wards.is_empty() {
        return Err(CatalogError::Empty {
            catalog: definition.id,
        });
    }

    let mut seen = BTreeSet::new();
    for (index, meta) in definition.wards.iter().enumerate() {
        let code = ward_code(index, meta);
        if !seen.insert(code.clone()) {
            return Err(CatalogError::DuplicateWardId {
                catalog: definition.id.clone(),
                ward_id: code,
            });
        }
    }

    Ok(definition)
}

/// Returns all embedded catalog definitions.
///
/// # Panics
///
/// Panics if any embedded TOML config is invalid. Since these are
/// compile-time constants, a failure indicates a development error and is
/// caught by the tests below.
#[must_use]
pub fn all_catalogs() -> Vec<CatalogDefinition> {
    CATALOG_TOMLS
        .iter()
        .map(|(name, toml)| {
            parse_catalog_toml(toml).unwrap_or_else(|e| panic!("Failed to parse {name}.toml: {e}"))
        })
        .collect()
}

/// Looks up an embedded catalog by identifier.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownCatalog`] if no embedded catalog has the
/// identifier, or any error from [`parse_catalog_toml`].
pub fn catalog_by_id(id: &str) -> Result<CatalogDefinition, CatalogError> {
    let (_, toml) = CATALOG_TOMLS
        .iter()
        .find(|(name, _)| *name == id)
        .ok_or_else(|| CatalogError::UnknownCatalog { id: id.to_string() })?;

    parse_catalog_toml(toml)
}

/// Identifiers of all embedded catalogs.
#[must_use]
pub fn catalog_ids() -> Vec<&'static str> {
    CATALOG_TOMLS.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_all_catalogs() {
        let catalogs = all_catalogs();
        assert_eq!(catalogs.len(), EXPECTED_CATALOG_COUNT);
    }

    #[test]
    fn file_names_match_catalog_ids() {
        for (name, toml) in CATALOG_TOMLS {
            let definition = parse_catalog_toml(toml).unwrap();
            assert_eq!(definition.id, *name);
        }
    }

    #[test]
    fn default_catalog_is_embedded() {
        assert!(catalog_ids().contains(&DEFAULT_CATALOG));
        assert_eq!(catalog_by_id(DEFAULT_CATALOG).unwrap().wards.len(), 22);
    }

    #[test]
    fn unknown_catalog_is_an_error() {
        assert!(matches!(
            catalog_by_id("atlantis"),
            Err(CatalogError::UnknownCatalog { .. })
        ));
    }

    #[test]
    fn all_entries_have_required_fields() {
        for catalog in &all_catalogs() {
            assert!(!catalog.name.is_empty(), "{}: empty name", catalog.id);
            for ward in &catalog.wards {
                assert!(!ward.name.is_empty(), "{}: ward with empty name", catalog.id);
                assert!(!ward.city.is_empty(), "{}: {} has no city", catalog.id, ward.name);
                assert!(!ward.zone.is_empty(), "{}: {} has no zone", catalog.id, ward.name);
            }
        }
    }

    #[test]
    fn rejects_duplicate_pre_assigned_ids() {
        let toml = r#"
            id = "dupes"
            name = "Dupes"

            [[wards]]
            id = "W-1"
            name = "A"
            city = "Delhi"
            zone = "North"

            [[wards]]
            id = "W-1"
            name = "B"
            city = "Delhi"
            zone = "South"
        "#;

        assert!(matches!(
            parse_catalog_toml(toml),
            Err(CatalogError::DuplicateWardId { ward_id, .. }) if ward_id == "W-1"
        ));
    }

    #[test]
    fn rejects_empty_catalog() {
        let toml = r#"
            id = "empty"
            name = "Empty"
            wards = []
        "#;

        assert!(matches!(
            parse_catalog_toml(toml),
            Err(CatalogError::Empty { .. })
        ));
    }

    #[test]
    fn missing_rules_fall_back_to_defaults() {
        let toml = r#"
            id = "bare"
            name = "Bare"

            [[wards]]
            name = "Adyar"
            city = "Chennai"
            zone = "South"
        "#;

        let definition = parse_catalog_toml(toml).unwrap();
        assert_eq!(definition.defaults.base_aqi, 100);
        assert!(definition.profiles.is_empty());
        assert!(definition.modifiers.is_empty());
    }
}
