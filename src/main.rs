//! River Level Exporter - Main Daemon
//!
//! A long-running exporter that:
//! 1. Polls one EA flood-monitoring station's measures resource
//! 2. Publishes the latest water level and period as Prometheus gauges
//! 3. Writes a sentinel pair on fetch/parse failure or stale data
//! 4. Serves /metrics for scraping
//!
//! Usage:
//!   cargo run --release                           # defaults, port 50000
//!   cargo run --release -- --config custom.toml   # explicit config file
//!
//! Environment:
//!   RUST_LOG - tracing filter (default "info")

use riverlevel_exporter::config;
use riverlevel_exporter::endpoint::EndpointServer;
use riverlevel_exporter::metrics::ExporterMetrics;
use riverlevel_exporter::poller::Poller;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path = PathBuf::from("riverlevel.toml");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 < args.len() {
                    config_path = PathBuf::from(&args[i + 1]);
                    i += 2;
                } else {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Usage: {} [--config PATH]", args[0]);
                std::process::exit(1);
            }
        }
    }

    let config = match config::load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let metrics = match ExporterMetrics::new() {
        Ok(metrics) => Arc::new(metrics),
        Err(e) => {
            eprintln!("Failed to build metrics registry: {}", e);
            std::process::exit(1);
        }
    };

    let mut poller = match Poller::new(&config, Arc::clone(&metrics)) {
        Ok(poller) => poller,
        Err(e) => {
            eprintln!("Failed to build poller: {}", e);
            std::process::exit(1);
        }
    };

    // Bind before the first poll so a port clash fails fast.
    let server = match EndpointServer::bind(&format!("0.0.0.0:{}", config.listen_port)) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    info!(
        station_url = %config.station_url,
        interval_minutes = config.poll_interval_minutes,
        "starting poll loop"
    );

    // First cycle runs synchronously so the gauges are populated before the
    // first scrape; the timer thread owns every cycle after that.
    poller.poll();
    std::thread::spawn(move || poller.run());

    info!(port = config.listen_port, "metrics endpoint listening");
    server.serve(metrics);
}
