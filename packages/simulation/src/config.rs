//! Simulation settings read from the environment.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use ward_air_catalog::DEFAULT_CATALOG;

/// Seconds between live updates when not configured.
pub const DEFAULT_TICK_SECS: u64 = 5;

/// How the simulation is seeded and paced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Embedded catalog to build wards from.
    pub catalog_id: String,
    /// Time between live updates.
    pub tick_interval: Duration,
    /// Fixed seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            catalog_id: DEFAULT_CATALOG.to_string(),
            tick_interval: Duration::from_secs(DEFAULT_TICK_SECS),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Reads `WARD_AIR_CATALOG`, `WARD_AIR_TICK_SECS` and `WARD_AIR_SEED`,
    /// falling back to the defaults for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let catalog_id = std::env::var("WARD_AIR_CATALOG").unwrap_or(defaults.catalog_id);
        let tick_interval = std::env::var("WARD_AIR_TICK_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map_or(defaults.tick_interval, Duration::from_secs);
        let seed = std::env::var("WARD_AIR_SEED")
            .ok()
            .and_then(|s| s.parse().ok());

        Self {
            catalog_id,
            tick_interval,
            seed,
        }
    }

    /// Creates the random source for this run.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed.map_or_else(
            || {
                log::info!("Seeding simulation from the OS");
                StdRng::from_os_rng()
            },
            |seed| {
                log::info!("Seeding simulation with {seed}");
                StdRng::seed_from_u64(seed)
            },
        )
    }
}
