#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Live ward simulation.
//!
//! A [`Catalog`] is an immutable snapshot of every ward at one tick. The
//! [`stepper`] turns a snapshot into the next one, the [`store::CatalogStore`]
//! publishes the latest snapshot to any number of readers, and the
//! [`ticker`] drives the stepper on a fixed interval.

pub mod config;
pub mod stepper;
pub mod store;
pub mod ticker;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use ward_air_catalog_models::CatalogDefinition;
use ward_air_ward_models::Ward;

pub use config::SimulationConfig;
pub use stepper::step_catalog;
pub use store::CatalogStore;
pub use ticker::{TickerHandle, spawn_ticker};

/// Every ward at a single point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Identifier of the catalog definition the wards were built from.
    pub catalog_id: String,
    /// Number of updates applied since the catalog was built.
    pub tick: u64,
    pub generated_at: DateTime<Utc>,
    pub wards: Vec<Ward>,
}

impl Catalog {
    /// Builds the tick-zero snapshot for `definition`.
    pub fn build<R: Rng + ?Sized>(definition: &CatalogDefinition, rng: &mut R) -> Self {
        Self {
            catalog_id: definition.id.clone(),
            tick: 0,
            generated_at: Utc::now(),
            wards: ward_air_catalog::build_wards(definition, rng),
        }
    }

    /// Finds a ward by id.
    #[must_use]
    pub fn ward(&self, id: &str) -> Option<&Ward> {
        self.wards.iter().find(|w| w.id == id)
    }
}
