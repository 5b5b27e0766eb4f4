//! Versioned Document API Service
//!
//! A small document-retrieval HTTP service with two API versions.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │              DOCUMENT API SERVICE             │
//!                      │                                               │
//!   Client Request     │  ┌──────────┐    ┌───────────┐    ┌────────┐ │
//!   ──────────────────────▶│   http   │───▶│versioning │───▶│ router │ │
//!                      │  │  server  │    │middleware │    │ (axum) │ │
//!                      │  └──────────┘    └───────────┘    └───┬────┘ │
//!                      │                                       │      │
//!                      │                                       ▼      │
//!   Client Response    │  ┌──────────┐    ┌───────────────────────┐   │
//!   ◀──────────────────────│ response │◀───│  documents (v1 / v2)  │   │
//!                      │  └──────────┘    │    DocumentStore      │   │
//!                      │                  └───────────────────────┘   │
//!                      │                                               │
//!                      │  ┌─────────────────────────────────────────┐ │
//!                      │  │          Cross-Cutting Concerns          │ │
//!                      │  │  config  │ observability │  lifecycle    │ │
//!                      │  └─────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```
//!
//! Requests with a version segment in the path pass through untouched;
//! requests signalling a version by header, or carrying no signal at
//! all, are rewritten to the canonical `/api/v<version>/...` form
//! before route matching. Unsupported versions are rejected with a 400
//! and a diagnostic payload.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use document_api::config::{load_config, ServiceConfig};
use document_api::http::HttpServer;
use document_api::lifecycle::{listen_for_signals, Shutdown};
use document_api::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "document-api")]
#[command(about = "Versioned document retrieval service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration; validation failures list every problem.
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!("document-api v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        path_template = %config.versioning.path_template,
        default_version = %config.versioning.default_version,
        supported_versions = ?config.versioning.supported_versions,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    listen_for_signals(shutdown.clone());

    // Create and run HTTP server; policy and seed errors are fatal here.
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
