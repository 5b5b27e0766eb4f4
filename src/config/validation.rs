//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Versioning invariants (placeholder present, format compiles,
//!   default version is a member of the supported set)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::ServiceConfig;
use crate::versioning::VersionPolicy;

/// A single semantic configuration problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The versioning section cannot compile into a policy.
    Versioning(String),
    /// The default version is not in the supported set.
    DefaultVersionUnsupported { default: String },
    /// The supported version set is empty.
    NoSupportedVersions,
    /// A configured header name is empty.
    EmptyHeaderName,
    /// An address field does not parse.
    InvalidAddress { field: &'static str, value: String },
    /// A timeout is zero.
    ZeroTimeout { field: &'static str },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Versioning(msg) => write!(f, "versioning: {}", msg),
            ValidationError::DefaultVersionUnsupported { default } => write!(
                f,
                "versioning: default version {:?} is not in supported_versions",
                default
            ),
            ValidationError::NoSupportedVersions => {
                write!(f, "versioning: supported_versions must not be empty")
            }
            ValidationError::EmptyHeaderName => {
                write!(f, "versioning: accepted_version_headers contains an empty name")
            }
            ValidationError::InvalidAddress { field, value } => {
                write!(f, "{}: {:?} is not a valid socket address", field, value)
            }
            ValidationError::ZeroTimeout { field } => {
                write!(f, "{}: timeout must be greater than zero", field)
            }
        }
    }
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = VersionPolicy::from_config(&config.versioning) {
        errors.push(ValidationError::Versioning(e.to_string()));
    }

    if config.versioning.supported_versions.is_empty() {
        errors.push(ValidationError::NoSupportedVersions);
    } else if !config
        .versioning
        .supported_versions
        .contains(&config.versioning.default_version)
    {
        errors.push(ValidationError::DefaultVersionUnsupported {
            default: config.versioning.default_version.clone(),
        });
    }

    if config
        .versioning
        .accepted_version_headers
        .iter()
        .any(|name| name.trim().is_empty())
    {
        errors.push(ValidationError::EmptyHeaderName);
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "timeouts.request_secs",
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn test_missing_placeholder_rejected() {
        let mut config = ServiceConfig::default();
        config.versioning.path_template = "/api/latest".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::Versioning(_)));
    }

    #[test]
    fn test_default_version_must_be_supported() {
        let mut config = ServiceConfig::default();
        config.versioning.default_version = "9.0.0".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::DefaultVersionUnsupported { .. })));
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = ServiceConfig::default();
        config.versioning.path_template = "/api".into();
        config.versioning.supported_versions.clear();
        config.listener.bind_address = "not-an-address".into();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.len() >= 4, "expected every error, got {errors:?}");
    }

    #[test]
    fn test_invalid_metrics_address_only_checked_when_enabled() {
        let mut config = ServiceConfig::default();
        config.observability.metrics_address = "bogus".into();
        assert!(validate_config(&config).is_err());

        config.observability.metrics_enabled = false;
        assert!(validate_config(&config).is_ok());
    }
}
