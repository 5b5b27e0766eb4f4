//! Request classification and path rewriting.
//!
//! # Responsibilities
//! - Resolve the effective version (path signal wins over header signal)
//! - Validate the effective version against the supported set
//! - Rewrite the path to its canonical versioned form
//!
//! # Design Decisions
//! - Pure function of (path, headers, policy): no shared mutable state
//! - Segment-indexed insertion, not string splicing
//! - One leading `v` stripped for comparison; otherwise exact string match
//! - With a path signal present the header is never inspected again

use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::versioning::policy::VersionPolicy;
use crate::versioning::signal::{detect, VersionSignal};

/// Outcome of classifying one request. Exactly one is produced per
/// request and it is never partially applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Continue downstream with this path. Equal to the input path when
    /// the request was already canonical.
    Rewrite(String),
    /// Terminate with a 400 response carrying this payload.
    Reject(UnsupportedVersion),
}

/// Diagnostic payload for a rejected version.
///
/// Field names are part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsupportedVersion {
    pub message: String,
    pub api_template: String,
    pub version_format: String,
    pub supported_headers: Vec<String>,
    pub supported_versions: Vec<String>,
    pub default_version: String,
}

impl UnsupportedVersion {
    fn new(token: &str, policy: &VersionPolicy) -> Self {
        Self {
            message: format!(
                "The version {token} isn't supported. Please verify the url schema and headers"
            ),
            api_template: policy.path_template().to_string(),
            version_format: policy.version_format().as_str().to_string(),
            supported_headers: policy.accepted_version_headers().to_vec(),
            supported_versions: policy.supported_versions().to_vec(),
            default_version: policy.default_version().to_string(),
        }
    }
}

/// Classify one request: detect signals, resolve precedence, validate,
/// and produce the rewrite or rejection.
pub fn classify(path: &str, headers: &HeaderMap, policy: &VersionPolicy) -> Decision {
    decide(path, &detect(path, headers, policy), policy)
}

/// Classification against an already-detected signal.
pub fn decide(path: &str, signal: &VersionSignal, policy: &VersionPolicy) -> Decision {
    if signal.is_empty() {
        return Decision::Rewrite(insert_version(path, policy.default_version(), policy));
    }

    // Path strictly takes precedence; the header is advisory once a path
    // signal exists and its value is not re-validated.
    let token = match &signal.path {
        Some(token) => token.as_str(),
        None => signal.header.as_ref().map(|h| h.value.as_str()).unwrap_or_default(),
    };

    let version = strip_v(token);
    if !policy.supports(version) {
        return Decision::Reject(UnsupportedVersion::new(token, policy));
    }

    if signal.path.is_some() {
        // Already canonical.
        Decision::Rewrite(path.to_string())
    } else {
        Decision::Rewrite(insert_version(path, version, policy))
    }
}

/// Insert `v<version>` at the template's version position.
///
/// The insertion index is clamped to the segment count so paths shorter
/// than the template cannot panic.
pub fn insert_version(path: &str, version: &str, policy: &VersionPolicy) -> String {
    let mut segments: Vec<&str> = path.split('/').collect();
    let segment = format!("v{}", strip_v(version));
    let index = policy.segment_index().min(segments.len());
    segments.insert(index, &segment);
    segments.join("/")
}

/// Strip one leading `v` from a token for comparison purposes.
fn strip_v(token: &str) -> &str {
    token.strip_prefix('v').unwrap_or(token)
}
