#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line entry point for the ward air dashboard.
//!
//! ```text
//! ward_air serve [--bind 0.0.0.0] [--port 8080] [--catalog delhi_ncr]
//! ward_air simulate [--catalog pan_india] [--ticks 12] [--seed 7]
//! ward_air heatmap <ward-id> [--metric pm25] [--year 2026]
//! ```
//!
//! Running with no subcommand lets the user pick a tool interactively.

mod heatmap;
mod simulate;

use std::time::Duration;

use chrono::Datelike as _;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use ward_air_analytics::generate_heatmap;
use ward_air_analytics_models::HeatmapMetric;
use ward_air_catalog::{DEFAULT_CATALOG, catalog_ids};
use ward_air_server::ServerConfig;
use ward_air_simulation::SimulationConfig;

#[derive(Parser)]
#[command(name = "ward_air", about = "Ward-level air quality dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server with live ward updates
    Serve {
        /// Address to bind (defaults to `BIND_ADDR` or 127.0.0.1)
        #[arg(long)]
        bind: Option<String>,
        /// Port to listen on (defaults to `PORT` or 8080)
        #[arg(long)]
        port: Option<u16>,
        /// Ward catalog to serve
        #[arg(long)]
        catalog: Option<String>,
        /// Seconds between live updates
        #[arg(long)]
        tick_secs: Option<u64>,
        /// Seed for reproducible readings
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run live updates offline and print how each ward moved
    Simulate {
        /// Ward catalog to simulate
        #[arg(long, default_value = DEFAULT_CATALOG)]
        catalog: String,
        /// Number of updates to apply
        #[arg(long, default_value = "12")]
        ticks: u64,
        /// Seed for reproducible readings
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the five-year seasonal heatmap for a ward
    Heatmap {
        /// Ward ID
        ward_id: String,
        /// AQI, PM25 or PM2.5
        #[arg(long, default_value = "AQI", value_parser = parse_metric)]
        metric: HeatmapMetric,
        /// Year in the middle of the grid (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },
}

fn parse_metric(value: &str) -> Result<HeatmapMetric, String> {
    value
        .parse()
        .map_err(|_| format!("unknown metric '{value}', expected AQI, PM25 or PM2.5"))
}

/// Tools offered when no subcommand is given.
enum Tool {
    Server,
    Simulate,
    Heatmap,
}

impl Tool {
    const ALL: &[Self] = &[Self::Server, Self::Simulate, Self::Heatmap];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Server => "Start server",
            Self::Simulate => "Simulate live updates",
            Self::Heatmap => "Show a ward heatmap",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return interactive().await;
    };

    match command {
        Commands::Serve {
            bind,
            port,
            catalog,
            tick_secs,
            seed,
        } => {
            let mut config = ServerConfig::from_env();
            if let Some(bind) = bind {
                config.bind_addr = bind;
            }
            if let Some(port) = port {
                config.port = port;
            }

            let mut simulation = SimulationConfig::from_env();
            if let Some(catalog) = catalog {
                simulation.catalog_id = catalog;
            }
            if let Some(secs) = tick_secs.filter(|secs| *secs > 0) {
                simulation.tick_interval = Duration::from_secs(secs);
            }
            if seed.is_some() {
                simulation.seed = seed;
            }

            serve(config, simulation).await?;
        }
        Commands::Simulate {
            catalog,
            ticks,
            seed,
        } => {
            let report = simulate::run_simulation(&catalog, ticks, seed)?;
            print!("{}", simulate::render_report(&report));
        }
        Commands::Heatmap {
            ward_id,
            metric,
            year,
        } => {
            let year = year.unwrap_or_else(|| chrono::Utc::now().year());
            let grid = generate_heatmap(&ward_id, metric, year);
            print!("{}", heatmap::render_heatmap(&grid));
        }
    }

    Ok(())
}

async fn interactive() -> Result<(), Box<dyn std::error::Error>> {
    println!("Ward Air Toolchain");
    println!();

    let labels: Vec<&str> = Tool::ALL.iter().map(Tool::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Tool::ALL[idx] {
        Tool::Server => {
            // actix-web runs its own runtime; keep it off the tokio workers.
            tokio::task::spawn_blocking(|| {
                actix_web::rt::System::new().block_on(ward_air_server::interactive::run())
            })
            .await??;
        }
        Tool::Simulate => {
            let ids = catalog_ids();
            let default = ids.iter().position(|id| *id == DEFAULT_CATALOG).unwrap_or(0);
            let choice = Select::new()
                .with_prompt("Ward catalog")
                .items(&ids)
                .default(default)
                .interact()?;
            let ticks: u64 = Input::new()
                .with_prompt("Number of updates")
                .default(12)
                .interact_text()?;

            let report = simulate::run_simulation(ids[choice], ticks, None)?;
            print!("{}", simulate::render_report(&report));
        }
        Tool::Heatmap => {
            let ward_id: String = Input::new().with_prompt("Ward ID").interact_text()?;
            let metrics = [HeatmapMetric::Aqi, HeatmapMetric::Pm25];
            let labels: Vec<String> = metrics.iter().map(ToString::to_string).collect();
            let metric = Select::new()
                .with_prompt("Metric")
                .items(&labels)
                .default(0)
                .interact()?;

            let grid = generate_heatmap(&ward_id, metrics[metric], chrono::Utc::now().year());
            print!("{}", heatmap::render_heatmap(&grid));
        }
    }

    Ok(())
}

async fn serve(
    config: ServerConfig,
    simulation: SimulationConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    tokio::task::spawn_blocking(move || {
        actix_web::rt::System::new().block_on(ward_air_server::run_server(config, simulation))
    })
    .await??;

    Ok(())
}
