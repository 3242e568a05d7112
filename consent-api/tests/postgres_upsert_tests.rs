// tests/postgres_upsert_tests.rs
//! Postgres 上での ON CONFLICT の挙動確認。Docker が必要:
//! `cargo test -- --ignored`
mod common;

use chrono::Duration;
use common::db::TestDatabase;
use consent_api::domain::cookie_consent::CookieConsent;
use consent_api::repository::user_consent_repository::{ConsentStore, UserConsentRepository};
use consent_api::service::consent_service::ConsentService;
use std::sync::Arc;

#[tokio::test]
#[ignore = "requires docker"]
async fn test_postgres_concurrent_upserts_single_row() {
    let db = TestDatabase::postgres().await;
    let repo = Arc::new(UserConsentRepository::new(db.connection.clone()));

    let mut handles = Vec::new();
    for i in 0..32u8 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.upsert(
                "shared-uid".to_string(),
                CookieConsent::new(i % 2 == 0, i % 4 == 0, i % 8 == 0),
            )
            .await
        }));
    }

    let mut written = Vec::new();
    for handle in handles {
        written.push(handle.await.unwrap().unwrap().consent());
    }

    assert_eq!(repo.count().await.unwrap(), 1);
    let stored = repo.find_by_uid("shared-uid").await.unwrap().unwrap();
    assert!(written.contains(&stored.consent()));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_postgres_set_get_and_purge() {
    let db = TestDatabase::postgres().await;
    let service = ConsentService::new(db.connection.clone());

    let write = service
        .set_consent(None, CookieConsent::new(false, true, false))
        .await
        .unwrap();
    let lookup = service
        .get_consent(Some(write.record.uid.clone()))
        .await
        .unwrap();
    assert_eq!(
        lookup.record.map(|record| record.consent()),
        Some(CookieConsent::new(false, true, false))
    );

    // 負の期間はカットオフを未来にずらすので全件が対象になる
    let deleted = service.purge_expired(Duration::days(-1)).await.unwrap();
    assert_eq!(deleted, 1);
}
