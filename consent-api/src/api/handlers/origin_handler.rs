// src/api/handlers/origin_handler.rs
use crate::api::AppState;
use crate::error::AppResult;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

/// フロントエンドのスクリプトがリンク装飾に使う既知オリジン一覧
pub async fn list_origins_handler(
    State(app_state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<String>>> {
    let origins = app_state.origin_service.list_origins().await?;
    Ok(Json(origins))
}

pub fn origin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/origins", get(list_origins_handler))
        .route("/origins/", get(list_origins_handler))
}
