//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Compile the version policy and build the document store (fail fast)
//! - Create the Axum router with the versioned document routes
//! - Wire up middleware (version routing, timeout, request ID, CORS, tracing)
//! - Serve until shutdown

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::documents::{v1, v2, DocumentStore, MemoryStore, SeedError};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::http::response::no_route;
use crate::observability::metrics;
use crate::versioning::{version_routing, PolicyError, VersionPolicy};

/// Error raised while building the server. Always fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("version routing policy: {0}")]
    Policy(#[from] PolicyError),

    #[error("document store seed: {0}")]
    Seed(#[from] SeedError),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}

/// HTTP server for the document API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration, seeding
    /// the store from the configured file when one is set.
    pub fn new(config: ServiceConfig) -> Result<Self, StartupError> {
        let store: Arc<dyn DocumentStore> = match &config.documents.seed_path {
            Some(path) => Arc::new(MemoryStore::seed_from_file(Path::new(path))?),
            None => Arc::new(MemoryStore::new()),
        };
        Self::with_store(config, store)
    }

    /// Create a server over an existing store.
    pub fn with_store(
        config: ServiceConfig,
        store: Arc<dyn DocumentStore>,
    ) -> Result<Self, StartupError> {
        let policy = Arc::new(VersionPolicy::from_config(&config.versioning)?);
        let router = Self::build_router(&config, policy, AppState { store });
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The versioning middleware sits closest to the router so every
    /// request is rewritten to canonical form right before matching,
    /// while rejections still pass through tracing and request IDs.
    fn build_router(config: &ServiceConfig, policy: Arc<VersionPolicy>, state: AppState) -> Router {
        let cors = if config.listener.cors_enabled {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
        };

        Router::new()
            .route("/api/v1.0.0/document", get(v1::list_documents))
            .route("/api/v1.0.0/document/{id}", get(v1::get_document))
            .route("/api/v2.0.0/document", get(v2::list_documents))
            .route("/api/v2.0.0/document/{id}", get(v2::get_document))
            .fallback(no_route)
            .with_state(state)
            .layer(
                // Top entry runs first on the way in.
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(set_request_id_layer())
                    .layer(propagate_request_id_layer())
                    .layer(cors)
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(from_fn(metrics::track_requests))
                    .layer(from_fn_with_state(policy, version_routing)),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
