// src/repository/user_consent_repository.rs

use crate::domain::cookie_consent::CookieConsent;
use crate::domain::user_consent_model::{
    self, ActiveModel as UserConsentActiveModel, Column, Entity as UserConsentEntity,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::{entity::*, query::*, DbConn, DbErr, PaginatorTrait};

/// Storage seam for consent records.
#[async_trait]
pub trait ConsentStore: Send + Sync {
    async fn find_by_uid(&self, uid: &str) -> Result<Option<user_consent_model::Model>, DbErr>;

    /// 同一 uid への同時書き込みでも 1 行に収束する (last write wins)
    async fn upsert(
        &self,
        uid: String,
        consent: CookieConsent,
    ) -> Result<user_consent_model::Model, DbErr>;

    async fn find_all(&self) -> Result<Vec<user_consent_model::Model>, DbErr>;

    async fn delete_updated_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr>;
}

pub struct UserConsentRepository {
    db: DbConn,
}

impl UserConsentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        UserConsentEntity::find().count(&self.db).await
    }
}

#[async_trait]
impl ConsentStore for UserConsentRepository {
    async fn find_by_uid(&self, uid: &str) -> Result<Option<user_consent_model::Model>, DbErr> {
        UserConsentEntity::find_by_id(uid.to_string())
            .one(&self.db)
            .await
    }

    async fn upsert(
        &self,
        uid: String,
        consent: CookieConsent,
    ) -> Result<user_consent_model::Model, DbErr> {
        let active = UserConsentActiveModel::for_write(uid, consent, Utc::now());

        // INSERT ... ON CONFLICT (uid) DO UPDATE を 1 文で実行する
        // created_at は更新対象に含めない
        UserConsentEntity::insert(active)
            .on_conflict(
                OnConflict::column(Column::Uid)
                    .update_columns([
                        Column::Essential,
                        Column::Settings,
                        Column::Usage,
                        Column::Campaigns,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
    }

    async fn find_all(&self) -> Result<Vec<user_consent_model::Model>, DbErr> {
        UserConsentEntity::find()
            .order_by_desc(Column::UpdatedAt)
            .all(&self.db)
            .await
    }

    async fn delete_updated_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let delete_result = UserConsentEntity::delete_many()
            .filter(Column::UpdatedAt.lt(cutoff))
            .exec(&self.db)
            .await?;

        Ok(delete_result.rows_affected)
    }
}
