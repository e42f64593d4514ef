//! Agency estimator quote API.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http server ──▶ quote handler ──▶ Calculator
//!                    (request id,     (form type,        (selection replay,
//!                     timeout,         snapshot)          quote, breakdown)
//!                     body limit)                              │
//!     Client Response                                          │
//!     ◀──────────────────────────────── Projection (JSON) ◀────┘
//!
//!     Cross-cutting: config (TOML) · logging (tracing) · metrics (Prometheus)
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use agency_estimator::config::load_or_default;
use agency_estimator::observability::{init_logging, init_metrics};
use agency_estimator::HttpServer;

#[derive(Parser)]
#[command(name = "agency-estimator")]
#[command(about = "Quote API for the agency project estimator", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_or_default(args.config.as_deref())?;

    init_logging(&config.observability);

    tracing::info!("agency-estimator v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        submission_endpoint = %config.submission.endpoint,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
