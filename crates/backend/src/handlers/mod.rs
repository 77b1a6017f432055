pub mod dashboard;
pub mod orders;

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::domain::order::service::OrderError;

/// Map a service error onto the wire: 404 with the historical payload, 400
/// for rejected input, 500 with a machine-readable kind for store trouble.
pub(crate) fn error_response(context: &str, err: OrderError) -> (StatusCode, Json<Value>) {
    match err {
        OrderError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Order not found"})),
        ),
        OrderError::Invalid(reason) => (StatusCode::BAD_REQUEST, Json(json!({"error": reason}))),
        OrderError::Store(e) => {
            tracing::error!("{}: store failure: {}", context, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "store unavailable", "kind": "store"})),
            )
        }
    }
}
