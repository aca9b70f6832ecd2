#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the ward air quality dashboard.
//!
//! Configured entirely from the environment: `BIND_ADDR`, `PORT`,
//! `WARD_AIR_CATALOG`, `WARD_AIR_TICK_SECS`, `WARD_AIR_SEED` and the AI
//! provider variables.

use ward_air_server::{ServerConfig, run_server};
use ward_air_simulation::SimulationConfig;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    run_server(ServerConfig::from_env(), SimulationConfig::from_env()).await?;

    Ok(())
}
