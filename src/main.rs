//! Record Server - a read-only JSON API over person records.
//!
//! This binary starts the HTTP server and configures all components.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use record_server::{
    config::Config,
    server::{create_router, RouterConfig},
    store::{FileRecordStore, RecordSource},
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let store = FileRecordStore::new(config.data_file.clone());

    info!("Record Server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration:");
    info!("  Data file: {}", store.path().display());
    match &config.cors_origins {
        Some(origins) => info!("  CORS origins: {}", origins.join(", ")),
        None => info!("  CORS origins: any"),
    }

    // A bad file is not fatal: requests answer 500 until it is fixed
    info!("");
    info!("Checking data file...");
    match store.load_all().await {
        Ok(records) => info!("  Loaded {} record(s)", records.len()),
        Err(e) => {
            warn!("  {}", e);
            warn!("  Data routes will answer 500 until the file is readable");
        }
    }

    let router = create_router(store, build_router_config(&config));

    let addr = config.bind_address();

    info!("");
    info!("────────────────────────────────────────────────────────────────");
    info!("  Server listening on: http://{}", addr);
    info!("");
    info!("  Try these endpoints:");
    info!("    curl http://{}/health", addr);
    info!("    curl -H 'Authorization: <token>' http://{}/data", addr);
    info!("    curl -H 'Authorization: <token>' http://{}/data/1", addr);
    info!("────────────────────────────────────────────────────────────────");
    info!("");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "record_server=debug,tower_http=debug"
    } else {
        "record_server=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build RouterConfig from the application Config.
fn build_router_config(config: &Config) -> RouterConfig {
    let mut router_config = RouterConfig::new(config.auth_token_or_empty());

    router_config = match config.cors_origins {
        Some(ref origins) => router_config.with_cors_origins(origins.clone()),
        None => router_config.with_cors_any_origin(),
    };

    router_config.with_tracing(!config.no_tracing)
}
