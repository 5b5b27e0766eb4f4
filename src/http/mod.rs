//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layer stack)
//!     → request.rs (request ID make/propagate)
//!     → versioning middleware (path rewrite or 400)
//!     → documents handlers (v1/v2)
//!     → response.rs (shared error shapes, fallback)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{propagate_request_id_layer, set_request_id_layer, X_REQUEST_ID};
pub use server::{AppState, HttpServer, StartupError};
