use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::order::aggregate::{Order, OrderDraft};
use serde::Deserialize;
use serde_json::Value;

use super::error_response;
use crate::domain::order::service;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListParams {
    pub date: Option<String>,
}

/// GET /api/orders?date=YYYY-MM-DD
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Order>>, (StatusCode, Json<Value>)> {
    match service::list_for_day(&state.db, params.date.as_deref()).await {
        Ok(orders) => Ok(Json(orders)),
        Err(e) => Err(error_response("list orders", e)),
    }
}

/// POST /api/orders
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<OrderDraft>,
) -> Result<Json<Order>, (StatusCode, Json<Value>)> {
    match service::create(&state.db, &state.broadcaster, draft).await {
        Ok(order) => {
            tracing::info!("order {} created, total {}", order.to_string_id(), order.total);
            Ok(Json(order))
        }
        Err(e) => Err(error_response("create order", e)),
    }
}

#[derive(Deserialize)]
pub struct StatusBody {
    pub status: String,
}

/// PATCH /api/orders/:id/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<StatusBody>,
) -> Result<Json<Order>, (StatusCode, Json<Value>)> {
    match service::update_status(&state.db, &state.broadcaster, &id, &body.status).await {
        Ok(order) => Ok(Json(order)),
        Err(e) => Err(error_response("update order status", e)),
    }
}
