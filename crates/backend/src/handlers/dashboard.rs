use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::dashboards::sales::{PeakHour, RepeatCustomer, SalesTotals, TopDish};
use serde::Deserialize;
use serde_json::Value;

use super::error_response;
use crate::dashboards::sales::service;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SalesParams {
    pub period: Option<String>,
    pub date: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// GET /api/dashboard/sales?period=day&date=YYYY-MM-DD (or from/to)
pub async fn sales(
    State(state): State<AppState>,
    Query(params): Query<SalesParams>,
) -> Result<Json<SalesTotals>, (StatusCode, Json<Value>)> {
    match service::sales_totals(&state.db, params.period, params.date, params.from, params.to)
        .await
    {
        Ok(totals) => Ok(Json(totals)),
        Err(e) => Err(error_response("dashboard sales", e)),
    }
}

#[derive(Deserialize)]
pub struct TopDishParams {
    pub date: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// GET /api/dashboard/topdish?date=YYYY-MM-DD (or from/to)
pub async fn top_dish(
    State(state): State<AppState>,
    Query(params): Query<TopDishParams>,
) -> Result<Json<Option<TopDish>>, (StatusCode, Json<Value>)> {
    match service::top_dish(&state.db, params.date, params.from, params.to).await {
        Ok(dish) => Ok(Json(dish)),
        Err(e) => Err(error_response("dashboard topdish", e)),
    }
}

#[derive(Deserialize)]
pub struct RepeatCustomersParams {
    pub month: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub name: Option<String>,
}

/// GET /api/dashboard/repeatcustomers?month=YYYY-MM (or from/to), optional name
pub async fn repeat_customers(
    State(state): State<AppState>,
    Query(params): Query<RepeatCustomersParams>,
) -> Result<Json<Vec<RepeatCustomer>>, (StatusCode, Json<Value>)> {
    match service::repeat_customers(&state.db, params.month, params.from, params.to, params.name)
        .await
    {
        Ok(repeats) => Ok(Json(repeats)),
        Err(e) => Err(error_response("dashboard repeatcustomers", e)),
    }
}

#[derive(Deserialize)]
pub struct PeakHourParams {
    pub date: Option<String>,
}

/// GET /api/dashboard/peakhour?date=YYYY-MM-DD
pub async fn peak_hour(
    State(state): State<AppState>,
    Query(params): Query<PeakHourParams>,
) -> Result<Json<Option<PeakHour>>, (StatusCode, Json<Value>)> {
    match service::peak_hour(&state.db, params.date).await {
        Ok(peak) => Ok(Json(peak)),
        Err(e) => Err(error_response("dashboard peakhour", e)),
    }
}
