//! Versioned Document API Service Library

pub mod config;
pub mod documents;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod versioning;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use versioning::VersionPolicy;
