//! First-generation document controllers.
//!
//! Served under `/api/v1.0.0/document`. The response shapes are frozen:
//! bare payloads, and a 400 with the string `"NotFound"` for a missing
//! document. Clients depend on these quirks; fixes belong in v2.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::http::response::store_failure;
use crate::http::server::AppState;

/// GET `/api/v1.0.0/document`
pub async fn list_documents(State(state): State<AppState>) -> Response {
    match state.store.list() {
        Ok(documents) => (StatusCode::OK, Json(documents)).into_response(),
        Err(error) => store_failure(&error),
    }
}

/// GET `/api/v1.0.0/document/{id}`
pub async fn get_document(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = Uuid::parse_str(&id) else {
        return not_found();
    };
    match state.store.get(&id) {
        Ok(Some(document)) => (StatusCode::OK, Json(document)).into_response(),
        Ok(None) => not_found(),
        Err(error) => store_failure(&error),
    }
}

fn not_found() -> Response {
    (StatusCode::BAD_REQUEST, Json("NotFound")).into_response()
}
