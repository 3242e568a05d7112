// src/api/mod.rs
use crate::api::handlers::{
    consent_handler::{consent_router, list_consents_handler},
    health_handler::health_router,
    origin_handler::origin_router,
};
use crate::db::DbPool;
use crate::logging::{inject_request_context, logging_middleware};
use crate::service::{consent_service::ConsentService, origin_service::OriginService};
use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod dto;
pub mod handlers;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub consent_service: Arc<ConsentService>,
    pub origin_service: Arc<OriginService>,
    pub db: DbPool,
}

impl AppState {
    pub fn new(db_pool: DbPool) -> Self {
        Self::with_services(
            Arc::new(ConsentService::new(db_pool.clone())),
            Arc::new(OriginService::new(db_pool.clone())),
            db_pool,
        )
    }

    pub fn with_services(
        consent_service: Arc<ConsentService>,
        origin_service: Arc<OriginService>,
        db_pool: DbPool,
    ) -> Self {
        Self {
            consent_service,
            origin_service,
            db: db_pool,
        }
    }
}

/// CORS: 任意のオリジンからの GET/POST を許可する
///
/// 同意ステータスは複数のドメインから共有されるため、オリジンは限定しない。
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(std::time::Duration::from_secs(3600))
}

pub fn app_router(app_state: Arc<AppState>) -> Router {
    // /api/v1 配下は元のフロントエンドスクリプトが使うパス
    let api_v1 = consent_router()
        .merge(origin_router())
        .route("/consents", get(list_consents_handler));

    Router::new()
        .merge(consent_router())
        .merge(health_router())
        .nest("/api/v1", api_v1)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(app_state)
}
