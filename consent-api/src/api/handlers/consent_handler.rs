// src/api/handlers/consent_handler.rs
use crate::api::dto::consent_dto::{ConsentForm, ConsentStatusResponse};
use crate::api::AppState;
use crate::domain::cookie_consent::CookieConsent;
use crate::error::AppResult;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

// --- Read ---

/// uid なしの GET: 新しい uid を発行して status: null を返す (行は作らない)
pub async fn get_new_consent_handler(
    State(app_state): State<Arc<AppState>>,
) -> AppResult<Json<ConsentStatusResponse>> {
    lookup(&app_state, None).await
}

/// 保存されていない uid も 404 ではなく status: null で返す
pub async fn get_consent_handler(
    State(app_state): State<Arc<AppState>>,
    Path(uid): Path<String>,
) -> AppResult<Json<ConsentStatusResponse>> {
    lookup(&app_state, Some(uid)).await
}

async fn lookup(
    app_state: &AppState,
    uid: Option<String>,
) -> AppResult<Json<ConsentStatusResponse>> {
    let lookup = app_state.consent_service.get_consent(uid).await?;

    let response = match lookup.record {
        Some(record) => ConsentStatusResponse::from(record),
        None => ConsentStatusResponse::absent(lookup.uid),
    };

    Ok(Json(response))
}

// --- Write ---

pub async fn create_consent_handler(
    State(app_state): State<Arc<AppState>>,
    ConsentForm(consent): ConsentForm,
) -> AppResult<(StatusCode, Json<ConsentStatusResponse>)> {
    store(&app_state, None, consent).await
}

pub async fn set_consent_handler(
    State(app_state): State<Arc<AppState>>,
    Path(uid): Path<String>,
    ConsentForm(consent): ConsentForm,
) -> AppResult<(StatusCode, Json<ConsentStatusResponse>)> {
    store(&app_state, Some(uid), consent).await
}

async fn store(
    app_state: &AppState,
    uid: Option<String>,
    consent: CookieConsent,
) -> AppResult<(StatusCode, Json<ConsentStatusResponse>)> {
    let write = app_state.consent_service.set_consent(uid, consent).await?;

    info!(
        uid = %write.record.uid,
        uid_minted = write.uid_minted,
        "Consent status set"
    );

    // サーバーが uid を発行した場合のみ 201
    let status = if write.uid_minted {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(ConsentStatusResponse::from(write.record))))
}

// --- Listing ---

/// 保存済みの同意を更新日時の降順で返す
pub async fn list_consents_handler(
    State(app_state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<ConsentStatusResponse>>> {
    let records = app_state.consent_service.list_consents().await?;
    Ok(Json(
        records
            .into_iter()
            .map(ConsentStatusResponse::from)
            .collect(),
    ))
}

pub fn consent_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/consent",
            get(get_new_consent_handler).post(create_consent_handler),
        )
        .route(
            "/consent/",
            get(get_new_consent_handler).post(create_consent_handler),
        )
        .route(
            "/consent/{uid}",
            get(get_consent_handler).post(set_consent_handler),
        )
}
