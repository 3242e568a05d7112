// src/api/handlers/health_handler.rs
use crate::api::dto::health_dto::HealthCheckResponse;
use crate::api::AppState;
use crate::db;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use std::sync::Arc;
use tracing::warn;

pub async fn health_check_handler(
    State(app_state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthCheckResponse>) {
    match db::ping(&app_state.db).await {
        Ok(()) => (StatusCode::OK, Json(HealthCheckResponse::healthy())),
        Err(e) => {
            warn!(error = %e, "Health check failed: database unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthCheckResponse::unhealthy()),
            )
        }
    }
}

pub fn health_router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check_handler))
}
