// src/service/consent_service.rs

use crate::db::DbPool;
use crate::domain::cookie_consent::CookieConsent;
use crate::domain::user_consent_model;
use crate::error::{AppError, AppResult};
use crate::repository::user_consent_repository::{ConsentStore, UserConsentRepository};
use crate::utils::uid::generate_uid;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info};

/// Result of a consent lookup. `record` is `None` when nothing is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentLookup {
    pub uid: String,
    pub record: Option<user_consent_model::Model>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentWrite {
    pub record: user_consent_model::Model,
    /// uid がサーバー側で新規発行されたかどうか
    pub uid_minted: bool,
}

pub struct ConsentService {
    store: Arc<dyn ConsentStore>,
}

impl ConsentService {
    pub fn new(db_pool: DbPool) -> Self {
        Self::with_store(Arc::new(UserConsentRepository::new(db_pool)))
    }

    pub fn with_store(store: Arc<dyn ConsentStore>) -> Self {
        Self { store }
    }

    /// uid 未指定なら新しい uid を発行するが、行は作成しない
    pub async fn get_consent(&self, uid: Option<String>) -> AppResult<ConsentLookup> {
        let Some(uid) = normalize_uid(uid) else {
            let uid = generate_uid();
            debug!(uid = %uid, "Issued new uid without stored consent");
            return Ok(ConsentLookup { uid, record: None });
        };

        let record = self.store.find_by_uid(&uid).await?;
        Ok(ConsentLookup { uid, record })
    }

    pub async fn set_consent(
        &self,
        uid: Option<String>,
        consent: CookieConsent,
    ) -> AppResult<ConsentWrite> {
        let (uid, uid_minted) = match normalize_uid(uid) {
            Some(uid) => (uid, false),
            None => (generate_uid(), true),
        };

        let record = self
            .store
            .upsert(uid, consent.with_essential_enforced())
            .await?;

        debug!(
            uid = %record.uid,
            uid_minted,
            settings = record.settings,
            usage = record.usage,
            campaigns = record.campaigns,
            "Consent stored"
        );

        Ok(ConsentWrite { record, uid_minted })
    }

    pub async fn list_consents(&self) -> AppResult<Vec<user_consent_model::Model>> {
        Ok(self.store.find_all().await?)
    }

    /// updated_at が `now - older_than` より古い同意を削除
    pub async fn purge_expired(&self, older_than: Duration) -> AppResult<u64> {
        let cutoff = Utc::now().checked_sub_signed(older_than).ok_or_else(|| {
            AppError::ValidationError(format!(
                "Expiry window of {} days is out of range",
                older_than.num_days()
            ))
        })?;
        let deleted = self.store.delete_updated_before(cutoff).await?;

        info!(
            cutoff = %cutoff,
            deleted_count = deleted,
            "Expired consent purged"
        );

        Ok(deleted)
    }
}

// 空白だけの uid (例: "/consent/") は未指定として扱う。それ以外はそのまま使う
fn normalize_uid(uid: Option<String>) -> Option<String> {
    uid.filter(|u| !u.trim().is_empty())
}
