//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! service. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the document API service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address, CORS).
    pub listener: ListenerConfig,

    /// API version routing rules.
    pub versioning: VersioningConfig,

    /// Document store settings.
    pub documents: DocumentsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8081").
    pub bind_address: String,

    /// Allow cross-origin requests from any origin.
    pub cors_enabled: bool,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8081".to_string(),
            cors_enabled: true,
        }
    }
}

/// API version routing configuration.
///
/// The template marks where the version segment belongs in request
/// paths; `{version}` is the placeholder. Headers are consulted in
/// order, and only when the path carries no version segment.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VersioningConfig {
    /// Path template locating the version segment (e.g., "/api/{version}").
    pub path_template: String,

    /// Pattern a path segment must match to count as a version token.
    pub version_format: String,

    /// Header names consulted for a version signal, in priority order.
    pub accepted_version_headers: Vec<String>,

    /// Version applied when a request carries no signal.
    pub default_version: String,

    /// Versions accepted as routing targets, without the `v` prefix.
    pub supported_versions: Vec<String>,
}

impl Default for VersioningConfig {
    fn default() -> Self {
        Self {
            path_template: "/api/{version}".to_string(),
            version_format: r"^v[0-9]+\.[0-9]+\.[0-9]+$".to_string(),
            accepted_version_headers: vec![
                "accept-version".to_string(),
                "x-version".to_string(),
            ],
            default_version: "2.0.0".to_string(),
            supported_versions: vec!["1.0.0".to_string(), "2.0.0".to_string()],
        }
    }
}

/// Document store configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DocumentsConfig {
    /// Optional JSON file with documents loaded into the store at startup.
    pub seed_path: Option<String>,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON logs instead of the human-readable format.
    pub json_logs: bool,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
