//! Shared response shapes.
//!
//! # Responsibilities
//! - Store-failure 500 body used by both controller generations
//! - Fallback for paths no route claims
//!
//! # Design Decisions
//! - Version-specific envelopes live with their controllers, not here
//! - Unmatched paths 404 plainly; the versioning middleware may route
//!   an unrecognized segment here and that is expected

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::documents::StoreError;

/// 500 body for a failed store query.
pub fn store_failure(error: &StoreError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "message": "An error occurred",
            "error": error.to_string(),
        })),
    )
        .into_response()
}

/// Fallback handler for unmatched paths.
pub async fn no_route() -> Response {
    (StatusCode::NOT_FOUND, "No matching route found").into_response()
}
