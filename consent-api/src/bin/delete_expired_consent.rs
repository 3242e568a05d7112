// src/bin/delete_expired_consent.rs
//
// 期限切れの同意ステータスを削除するバッチ (cron などから定期実行する)
use consent_api::config::{expiry_window, AppConfig};
use consent_api::db::{create_db_pool, run_migrations};
use consent_api::logging::init_tracing;
use consent_api::service::consent_service::ConsentService;
use std::env;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(deleted) => {
            println!("Deleted {} expired consent statuses", deleted);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete expired consent");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<u64, Box<dyn std::error::Error>> {
    let app_config = AppConfig::from_env()?;

    // コマンドライン引数で保持日数を上書きできる
    let window = expiry_window(env::args().nth(1), app_config.consent_expiry_days)?;

    let db_pool = create_db_pool(&app_config).await?;
    run_migrations(&db_pool).await?;

    let service = ConsentService::new(db_pool.clone());
    let deleted = service.purge_expired(window).await?;

    db_pool.close().await?;
    Ok(deleted)
}
