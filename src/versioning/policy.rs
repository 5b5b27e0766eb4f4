//! Compiled version-routing policy.
//!
//! # Responsibilities
//! - Normalize the path template once, at construction
//! - Locate the `{version}` placeholder segment
//! - Compile the version format pattern
//! - Carry the header list and version sets as immutable values
//!
//! # Design Decisions
//! - Malformed templates fail at construction, never per-request
//! - Segment index, not character offset, addresses the version position

use regex::Regex;

use crate::config::VersioningConfig;

/// Placeholder that marks the version position inside the path template.
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Error raised while compiling a [`VersionPolicy`].
///
/// These are startup errors. A policy that constructs successfully can
/// classify any request without panicking.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("path template {0:?} does not contain the {{version}} placeholder")]
    MissingPlaceholder(String),

    #[error("version format pattern is not a valid regex: {0}")]
    InvalidFormat(#[from] regex::Error),
}

/// Immutable version-routing policy shared by every request.
#[derive(Debug, Clone)]
pub struct VersionPolicy {
    path_template: String,
    segment_index: usize,
    version_format: Regex,
    accepted_version_headers: Vec<String>,
    default_version: String,
    supported_versions: Vec<String>,
}

impl VersionPolicy {
    /// Compile a policy from configuration.
    ///
    /// The template is normalized to carry a leading slash here so the
    /// per-request path code never mutates shared state.
    pub fn from_config(config: &VersioningConfig) -> Result<Self, PolicyError> {
        let path_template = if config.path_template.starts_with('/') {
            config.path_template.clone()
        } else {
            format!("/{}", config.path_template)
        };

        let segment_index = path_template
            .split('/')
            .position(|segment| segment.contains(VERSION_PLACEHOLDER))
            .ok_or_else(|| PolicyError::MissingPlaceholder(config.path_template.clone()))?;

        let version_format = Regex::new(&config.version_format)?;

        Ok(Self {
            path_template,
            segment_index,
            version_format,
            accepted_version_headers: config.accepted_version_headers.clone(),
            default_version: config.default_version.clone(),
            supported_versions: config.supported_versions.clone(),
        })
    }

    /// The normalized path template, e.g. `/api/{version}`.
    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    /// Index of the version segment when the path is split on `/`.
    pub fn segment_index(&self) -> usize {
        self.segment_index
    }

    /// Pattern a path segment must match to count as a version token.
    pub fn version_format(&self) -> &Regex {
        &self.version_format
    }

    /// Header names consulted for a version signal, in priority order.
    pub fn accepted_version_headers(&self) -> &[String] {
        &self.accepted_version_headers
    }

    /// Version applied when the request carries no signal.
    pub fn default_version(&self) -> &str {
        &self.default_version
    }

    /// Versions accepted as routing targets, without the `v` prefix.
    pub fn supported_versions(&self) -> &[String] {
        &self.supported_versions
    }

    /// Exact, case-sensitive membership test against the supported set.
    pub fn supports(&self, version: &str) -> bool {
        self.supported_versions.iter().any(|v| v == version)
    }
}
