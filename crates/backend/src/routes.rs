use axum::http::{header, Method};
use axum::middleware;
use axum::routing::{get, patch};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;
use crate::{handlers, realtime, system};

/// All application routes: the order API, the dashboard API, the realtime
/// channel, and the static display pages (landing page + menu.json) served
/// from `public/`.
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Order lifecycle
        .route(
            "/api/orders",
            get(handlers::orders::list).post(handlers::orders::create),
        )
        .route(
            "/api/orders/:id/status",
            patch(handlers::orders::update_status),
        )
        // Sales dashboard
        .route("/api/dashboard/sales", get(handlers::dashboard::sales))
        .route("/api/dashboard/topdish", get(handlers::dashboard::top_dish))
        .route(
            "/api/dashboard/repeatcustomers",
            get(handlers::dashboard::repeat_customers),
        )
        .route("/api/dashboard/peakhour", get(handlers::dashboard::peak_hour))
        // Realtime channel for kitchen / front-desk displays
        .route("/ws", get(realtime::ws::upgrade))
        .fallback_service(ServeDir::new("public"))
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors)
        .with_state(state)
}
