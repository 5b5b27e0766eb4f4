//! Version signal detection.
//!
//! # Responsibilities
//! - Find a version token in the request path (template-positioned segment)
//! - Find a version token in the configured headers (first match wins)
//!
//! # Design Decisions
//! - Detection never fails: absent or malformed evidence is just "no signal"
//! - A segment that does not match the version format is not a path signal
//! - Paths shorter than the template degrade to "no path signal"

use axum::http::HeaderMap;

use crate::versioning::policy::VersionPolicy;

/// Version evidence found in a request header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSignal {
    /// Configured header name that matched.
    pub name: String,
    /// Literal header value, e.g. `1.0.0` or `v1.0.0`.
    pub value: String,
}

/// Version evidence carried by a single request.
///
/// A request may carry zero, one, or both signals. Precedence between
/// them is resolved in [`crate::versioning::classify`], not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionSignal {
    /// Token found at the template's version position, already validated
    /// against the version format.
    pub path: Option<String>,
    /// First configured header present with a non-empty value.
    pub header: Option<HeaderSignal>,
}

impl VersionSignal {
    /// True when the request carries no version evidence at all.
    pub fn is_empty(&self) -> bool {
        self.path.is_none() && self.header.is_none()
    }
}

/// Detect both signals for one request.
pub fn detect(path: &str, headers: &HeaderMap, policy: &VersionPolicy) -> VersionSignal {
    VersionSignal {
        path: detect_path_signal(path, policy),
        header: detect_header_signal(headers, policy),
    }
}

/// Extract the segment at the template's version position and test it
/// against the version format. Returns the literal token on a match.
pub fn detect_path_signal(path: &str, policy: &VersionPolicy) -> Option<String> {
    let segment = path.split('/').nth(policy.segment_index())?;
    if policy.version_format().is_match(segment) {
        Some(segment.to_string())
    } else {
        None
    }
}

/// Scan the configured header names in order; the first one present with
/// a non-empty value becomes the header signal. Later headers are only
/// consulted when earlier ones are absent.
pub fn detect_header_signal(headers: &HeaderMap, policy: &VersionPolicy) -> Option<HeaderSignal> {
    for name in policy.accepted_version_headers() {
        let value = headers
            .get(name.as_str())
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty());
        if let Some(value) = value {
            return Some(HeaderSignal {
                name: name.clone(),
                value: value.to_string(),
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VersioningConfig;
    use axum::http::HeaderValue;

    fn policy() -> VersionPolicy {
        VersionPolicy::from_config(&VersioningConfig::default()).unwrap()
    }

    #[test]
    fn test_path_signal_detected() {
        assert_eq!(
            detect_path_signal("/api/v1.0.0/document", &policy()),
            Some("v1.0.0".to_string())
        );
    }

    #[test]
    fn test_segment_without_v_prefix_is_not_a_path_signal() {
        assert_eq!(detect_path_signal("/api/1.0.0/document", &policy()), None);
    }

    #[test]
    fn test_ordinary_segment_is_not_a_path_signal() {
        assert_eq!(detect_path_signal("/api/document", &policy()), None);
    }

    #[test]
    fn test_short_path_degrades_to_no_signal() {
        assert_eq!(detect_path_signal("/", &policy()), None);
        assert_eq!(detect_path_signal("", &policy()), None);
    }

    #[test]
    fn test_version_at_end_of_path() {
        assert_eq!(
            detect_path_signal("/api/v2.0.0", &policy()),
            Some("v2.0.0".to_string())
        );
    }

    #[test]
    fn test_first_configured_header_wins() {
        let mut headers = HeaderMap::new();
        headers.insert("accept-version", HeaderValue::from_static("1.0.0"));
        headers.insert("x-version", HeaderValue::from_static("2.0.0"));

        let signal = detect_header_signal(&headers, &policy()).unwrap();
        assert_eq!(signal.name, "accept-version");
        assert_eq!(signal.value, "1.0.0");
    }

    #[test]
    fn test_later_header_used_when_earlier_absent() {
        let mut headers = HeaderMap::new();
        headers.insert("x-version", HeaderValue::from_static("2.0.0"));

        let signal = detect_header_signal(&headers, &policy()).unwrap();
        assert_eq!(signal.name, "x-version");
        assert_eq!(signal.value, "2.0.0");
    }

    #[test]
    fn test_empty_header_value_is_no_signal() {
        let mut headers = HeaderMap::new();
        headers.insert("accept-version", HeaderValue::from_static(""));
        assert_eq!(detect_header_signal(&headers, &policy()), None);
    }

    #[test]
    fn test_both_signals_recorded_independently() {
        let mut headers = HeaderMap::new();
        headers.insert("accept-version", HeaderValue::from_static("2.0.0"));

        let signal = detect("/api/v1.0.0/document", &headers, &policy());
        assert_eq!(signal.path.as_deref(), Some("v1.0.0"));
        assert_eq!(signal.header.unwrap().value, "2.0.0");
    }
}
