#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the ward air quality dashboard.
//!
//! Builds the ward catalog, keeps it live with a background ticker and
//! serves it as JSON under `/api`. Catalog snapshots are also pushed to
//! clients over server-sent events from `/api/wards/stream`. The built
//! frontend is served from `app/dist`.

mod handlers;
pub mod interactive;
mod stream;
mod views;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, Scope, middleware, web};
use thiserror::Error;
use ward_air_ai::Advisor;
use ward_air_catalog::{CatalogError, catalog_by_id};
use ward_air_simulation::{Catalog, CatalogStore, SimulationConfig, spawn_ticker};

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The configured catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Binding or serving failed.
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Listen address, read from `BIND_ADDR` and `PORT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr);
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        Self { bind_addr, port }
    }
}

/// Shared application state.
pub struct AppState {
    /// Latest catalog snapshot, replaced on every tick.
    pub store: CatalogStore,
    /// AI commentary, live or simulated.
    pub advisor: Advisor,
    /// Settings the simulation was started with.
    pub simulation: SimulationConfig,
}

impl AppState {
    /// Builds the tick-zero catalog described by `simulation`.
    ///
    /// Returns the state together with the random source the ticker should
    /// continue from.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the configured catalog does not exist.
    pub fn build(
        simulation: SimulationConfig,
        advisor: Advisor,
    ) -> Result<(Self, rand::rngs::StdRng), CatalogError> {
        let definition = catalog_by_id(&simulation.catalog_id)?;
        let mut rng = simulation.rng();
        let catalog = Catalog::build(&definition, &mut rng);

        log::info!(
            "Built catalog {} with {} wards",
            catalog.catalog_id,
            catalog.wards.len()
        );

        let state = Self {
            store: CatalogStore::new(catalog),
            advisor,
            simulation,
        };

        Ok((state, rng))
    }
}

/// All `/api` routes.
#[must_use]
pub fn api_scope() -> Scope {
    web::scope("/api")
        .route("/health", web::get().to(handlers::health))
        .route("/capabilities", web::get().to(handlers::capabilities))
        .route("/wards", web::get().to(handlers::wards))
        .route("/wards/search", web::get().to(handlers::search))
        .route("/wards/stream", web::get().to(stream::ward_stream))
        .route("/wards/{id}", web::get().to(handlers::ward))
        .route("/wards/{id}/heatmap", web::get().to(handlers::heatmap))
        .route("/wards/{id}/advisory", web::get().to(handlers::advisory))
        .route("/wards/{id}/compare", web::get().to(handlers::compare))
        .route("/wards/{id}/analysis", web::post().to(handlers::analysis))
        .route("/summary", web::get().to(handlers::summary))
        .route("/admin", web::get().to(handlers::admin))
        .route("/news", web::get().to(handlers::news))
        .route("/locate", web::get().to(handlers::locate))
        .route("/ai/forecast", web::post().to(handlers::ai_forecast))
        .route("/ai/ask", web::post().to(handlers::ai_ask))
        .route("/views/{mode}", web::get().to(handlers::view))
}

/// Starts the ward air API server.
///
/// Builds the catalog, starts the live-update ticker and runs the Actix-Web
/// HTTP server until it shuts down, then stops the ticker. This is a
/// regular async function; the caller provides the runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns [`ServerError::Catalog`] if the configured catalog is unknown,
/// or [`ServerError::Io`] if the server fails to bind or run.
#[allow(clippy::future_not_send)]
pub async fn run_server(
    config: ServerConfig,
    simulation: SimulationConfig,
) -> Result<(), ServerError> {
    let advisor = Advisor::from_env();
    let tick_interval = simulation.tick_interval;
    let (state, rng) = AppState::build(simulation, advisor)?;

    let store = state.store.clone();
    let state = web::Data::new(state);

    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(api_scope())
            // Serve frontend static files (production)
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((config.bind_addr, config.port))?
    .run();

    let ticker = spawn_ticker(store, rng, tick_interval);
    let result = server.await;

    let ticks = ticker.stop().await;
    log::info!("Server stopped after {ticks} live updates");

    result?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::Duration;

    use actix_web::web;
    use ward_air_ai::Advisor;
    use ward_air_simulation::SimulationConfig;

    use crate::AppState;

    pub fn state(catalog_id: &str) -> web::Data<AppState> {
        let simulation = SimulationConfig {
            catalog_id: catalog_id.to_string(),
            tick_interval: Duration::from_secs(5),
            seed: Some(11),
        };
        let (state, _rng) = AppState::build(simulation, Advisor::simulated()).unwrap();
        web::Data::new(state)
    }
}
