// src/domain/user_consent_model.rs

use crate::domain::cookie_consent::CookieConsent;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// One row per uid holding the latest consent decision.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_consent")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uid: String,
    pub essential: bool,
    pub settings: bool,
    pub usage: bool,
    pub campaigns: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn consent(&self) -> CookieConsent {
        CookieConsent {
            essential: self.essential,
            settings: self.settings,
            usage: self.usage,
            campaigns: self.campaigns,
        }
    }
}

impl ActiveModel {
    /// 書き込み用のアクティブモデルを作成 (essential は常に true)
    pub fn for_write(uid: String, consent: CookieConsent, now: DateTime<Utc>) -> Self {
        let consent = consent.with_essential_enforced();
        Self {
            uid: Set(uid),
            essential: Set(consent.essential),
            settings: Set(consent.settings),
            usage: Set(consent.usage),
            campaigns: Set(consent.campaigns),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}
