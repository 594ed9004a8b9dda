//! Currency rate server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ http server ──▶ routing ──▶ rates handler │
//!                           │   (request id,    (first      (stub)       │
//!     Client Response       │    tracing,        match)                  │
//!     ◀─────────────────────┼── timeout)    ◀── 404 JSON if no match     │
//!                           │                                            │
//!                           │   config · observability · lifecycle       │
//!                           └────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use currency_router::config::{load_config, ServerConfig};
use currency_router::lifecycle::Shutdown;
use currency_router::observability::init_logging;
use currency_router::{rates, HttpServer};

#[derive(Parser)]
#[command(name = "currency-router")]
#[command(about = "HTTP dispatcher for currency rate endpoints", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability)?;

    tracing::info!("currency-router v{} starting", env!("CARGO_PKG_VERSION"));

    let routes = rates::route_table()?;
    tracing::info!(routes = routes.routes().len(), "Route table built");

    let server = HttpServer::new(config, routes);
    let config = server.config();
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        log_format = ?config.observability.log_format,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    // Never triggered here; OS signals stop the binary.
    let shutdown = Shutdown::new();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
