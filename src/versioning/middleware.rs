//! Axum middleware applying version-routing decisions.
//!
//! Runs before route matching: a `Rewrite` mutates the request URI in
//! place, a `Reject` short-circuits with a 400 and the router is never
//! invoked.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{uri::PathAndQuery, Request, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::observability::metrics;
use crate::versioning::classify::{decide, Decision};
use crate::versioning::policy::VersionPolicy;
use crate::versioning::signal::detect;

/// Middleware entry point. The policy is compiled once at startup and
/// shared read-only across requests.
pub async fn version_routing(
    State(policy): State<Arc<VersionPolicy>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let signal = detect(&path, request.headers(), &policy);
    let outcome = if signal.path.is_some() {
        "path"
    } else if signal.header.is_some() {
        "header"
    } else {
        "default"
    };

    match decide(&path, &signal, &policy) {
        Decision::Rewrite(new_path) => {
            if new_path != path {
                tracing::debug!(
                    from = %path,
                    to = %new_path,
                    source = outcome,
                    "Rewriting request path"
                );
                rewrite_uri(&mut request, &new_path);
            }
            metrics::record_version_decision(outcome);
            next.run(request).await
        }
        Decision::Reject(payload) => {
            tracing::warn!(
                path = %path,
                source = outcome,
                "Unsupported API version"
            );
            metrics::record_version_decision("rejected");
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}

/// Replace the URI path, preserving the query string.
fn rewrite_uri(request: &mut Request<Body>, new_path: &str) {
    let mut parts = request.uri().clone().into_parts();
    let path_and_query = match request.uri().query() {
        Some(query) => format!("{new_path}?{query}"),
        None => new_path.to_string(),
    };
    match PathAndQuery::try_from(path_and_query.as_str()) {
        Ok(pq) => parts.path_and_query = Some(pq),
        Err(_) => return,
    }
    if let Ok(uri) = Uri::from_parts(parts) {
        *request.uri_mut() = uri;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_preserves_query() {
        let mut request = Request::builder()
            .uri("/api/document?limit=5&offset=10")
            .body(Body::empty())
            .unwrap();
        rewrite_uri(&mut request, "/api/v2.0.0/document");
        assert_eq!(
            request.uri().path_and_query().unwrap().as_str(),
            "/api/v2.0.0/document?limit=5&offset=10"
        );
    }

    #[test]
    fn test_rewrite_without_query() {
        let mut request = Request::builder()
            .uri("/api/document")
            .body(Body::empty())
            .unwrap();
        rewrite_uri(&mut request, "/api/v1.0.0/document");
        assert_eq!(request.uri().path(), "/api/v1.0.0/document");
    }
}
