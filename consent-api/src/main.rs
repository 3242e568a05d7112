// src/main.rs
use consent_api::api::{app_router, AppState};
use consent_api::config::AppConfig;
use consent_api::db::{create_db_pool, run_migrations};
use consent_api::logging::init_tracing;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    tracing::info!("Starting Consent API server...");

    // 設定を読み込む
    let app_config = AppConfig::from_env()?;
    tracing::info!(
        environment = %app_config.environment,
        consent_expiry_days = app_config.consent_expiry_days,
        "Configuration loaded"
    );

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config).await?;
    run_migrations(&db_pool).await?;
    tracing::info!("Database pool created and migrations applied.");

    let app_state = Arc::new(AppState::new(db_pool));

    // 既知オリジンを登録
    let registered = app_state
        .origin_service
        .register_all(&app_config.known_origins)
        .await?;
    tracing::info!(count = registered, "Known origins registered");

    let app_router = app_router(app_state);

    // サーバーの起動
    let server_addr = app_config.server_addr();
    tracing::info!("Router configured. Server listening on {}", server_addr);

    let listener = TcpListener::bind(&server_addr).await?;
    axum::serve(listener, app_router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
