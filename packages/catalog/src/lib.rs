#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Embedded ward catalogs and the ward catalog builder.
//!
//! Catalog definitions are TOML files baked into the binary. The builder
//! turns a definition into fully populated [`Ward`] records: profile rules
//! pick a pollution baseline for each entry, the injected random source adds
//! noise around it, and the entry's position fixes its place on the
//! dashboard grid.
//!
//! [`Ward`]: ward_air_ward_models::Ward

pub mod builder;
pub mod geometry;
pub mod profile;
pub mod registry;
pub mod search;

pub use builder::build_wards;
pub use registry::{DEFAULT_CATALOG, all_catalogs, catalog_by_id, catalog_ids, parse_catalog_toml};

use thiserror::Error;

/// Errors that can occur while loading a catalog definition.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The TOML was malformed or missing required fields.
    #[error("Failed to parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// No embedded catalog has the requested identifier.
    #[error("Unknown catalog: {id}")]
    UnknownCatalog {
        /// The requested identifier.
        id: String,
    },

    /// Two entries resolve to the same ward id.
    #[error("Duplicate ward id {ward_id} in catalog {catalog}")]
    DuplicateWardId {
        /// Catalog identifier.
        catalog: String,
        /// The repeated ward id.
        ward_id: String,
    },

    /// The catalog lists no wards.
    #[error("Catalog {catalog} has no wards")]
    Empty {
        /// Catalog identifier.
        catalog: String,
    },
}
