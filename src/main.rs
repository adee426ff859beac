//! Hardened User Portal
//!
//! A small HTTP service built with Tokio and Axum that performs each of
//! the classic request-handler operations safely.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                 USER PORTAL                   │
//!                     │                                               │
//!   GET /greet        │  ┌─────────┐   ┌───────────┐   ┌──────────┐  │
//!   ──────────────────┼─▶│  http   │──▶│ datastore │   │ listing  │  │
//!                     │  │ server  │   │ (bound    │   │ (allow-  │  │
//!                     │  └────┬────┘   │  params)  │   │  list)   │  │
//!                     │       │        └───────────┘   └──────────┘  │
//!                     │       │        ┌───────────┐   ┌──────────┐  │
//!                     │       └───────▶│  profile  │   │  render  │  │
//!   escaped HTML      │                │ (schema-  │   │ (escape) │  │
//!   ◀─────────────────┼────────────────│  checked) │◀──│          │  │
//!                     │                └───────────┘   └──────────┘  │
//!                     │                                               │
//!                     │  ┌─────────────────────────────────────────┐  │
//!                     │  │           Cross-Cutting Concerns         │  │
//!                     │  │  ┌────────┐ ┌──────────┐ ┌───────────┐  │  │
//!                     │  │  │ config │ │ security │ │observa-   │  │  │
//!                     │  │  │ + env  │ │ + limits │ │ bility    │  │  │
//!                     │  │  │secrets │ │          │ │           │  │  │
//!                     │  │  └────────┘ └──────────┘ └───────────┘  │  │
//!                     │  └─────────────────────────────────────────┘  │
//!                     └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use user_portal::config::{load_config, resolve_api_key, PortalConfig};
use user_portal::observability::logging::init_logging;
use user_portal::HttpServer;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "user-portal", version, about = "Hardened user portal service")]
struct Args {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration before logging so the configured level applies.
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => PortalConfig::default(),
    };

    init_logging(&config.observability.log_level);

    tracing::info!("user-portal v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_connections = config.listener.max_connections,
        request_timeout_secs = config.timeouts.request_secs,
        listing_aliases = config.listings.aliases.len(),
        "Configuration loaded"
    );

    // Secrets enter only through the environment. Startup fails fast
    // when the key is absent; the value itself is never logged.
    let api_key = resolve_api_key(&config)?;

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            user_portal::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let server = HttpServer::new(config, api_key)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
