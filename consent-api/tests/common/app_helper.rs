// tests/common/app_helper.rs

use axum::Router;
use consent_api::api::{app_router, AppState};
use std::sync::Arc;

use crate::common;

/// テスト用アプリのセットアップ
pub async fn setup_app() -> (Router, Arc<AppState>, common::db::TestDatabase) {
    let db = common::db::TestDatabase::new().await;
    let app_state = Arc::new(AppState::new(db.connection.clone()));

    (app_router(app_state.clone()), app_state, db)
}

/// 任意の AppState からルーターを組み立てる
pub fn router_for(app_state: AppState) -> Router {
    app_router(Arc::new(app_state))
}
