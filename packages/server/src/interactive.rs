//! Interactive mode for the server.
//!
//! Prompts for the listen address, the ward catalog and the update interval
//! before starting the server.

use std::time::Duration;

use dialoguer::{Confirm, Input, Select};
use ward_air_catalog::catalog_ids;
use ward_air_simulation::SimulationConfig;

use crate::{ServerConfig, ServerError, run_server};

/// Runs the server in interactive mode, prompting for configuration.
///
/// Defaults come from the environment, so pressing enter through every
/// prompt behaves like a plain start.
///
/// # Errors
///
/// Returns [`ServerError`] if the server fails to start.
#[allow(clippy::future_not_send)]
pub async fn run() -> Result<(), ServerError> {
    println!("Ward Air Server");
    println!();

    let defaults = ServerConfig::from_env();
    let mut simulation = SimulationConfig::from_env();

    let bind_addr: String = Input::new()
        .with_prompt("Bind address")
        .default(defaults.bind_addr.clone())
        .interact_text()
        .unwrap_or(defaults.bind_addr);

    let port: u16 = Input::new()
        .with_prompt("Port")
        .default(defaults.port)
        .interact_text()
        .unwrap_or(defaults.port);

    let ids = catalog_ids();
    let current = ids
        .iter()
        .position(|id| *id == simulation.catalog_id)
        .unwrap_or(0);
    let choice = Select::new()
        .with_prompt("Ward catalog")
        .items(&ids)
        .default(current)
        .interact()
        .unwrap_or(current);
    if let Some(id) = ids.get(choice) {
        simulation.catalog_id = (*id).to_string();
    }

    let secs: u64 = Input::new()
        .with_prompt("Seconds between live updates")
        .default(simulation.tick_interval.as_secs())
        .validate_with(|secs: &u64| {
            if *secs == 0 {
                Err("must be at least 1")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .unwrap_or_else(|_| simulation.tick_interval.as_secs());
    simulation.tick_interval = Duration::from_secs(secs);

    if !Confirm::new()
        .with_prompt(format!(
            "Start server on {bind_addr}:{port} with catalog {}?",
            simulation.catalog_id
        ))
        .default(true)
        .interact()
        .unwrap_or(true)
    {
        println!("Cancelled.");
        return Ok(());
    }

    run_server(ServerConfig { bind_addr, port }, simulation).await
}
