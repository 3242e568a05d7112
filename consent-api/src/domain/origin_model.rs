// src/domain/origin_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use url::Url;

/// A cooperating service origin (scheme, host, port).
///
/// The front-end script fetches this list to decide which cross-origin links
/// get the uid appended.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "origin")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub origin: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// オリジン文字列を `scheme://host[:port]` に正規化する
pub fn normalize_origin(raw: &str) -> Result<String, String> {
    let url = Url::parse(raw.trim()).map_err(|e| format!("Invalid origin '{}': {}", raw, e))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("Origin '{}' must use http or https", raw));
    }
    if url.host_str().is_none() {
        return Err(format!("Origin '{}' has no host", raw));
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(format!(
            "Origin '{}' must not contain a path, query or fragment",
            raw
        ));
    }

    // ascii_serialization はデフォルトポートを省略する
    Ok(url.origin().ascii_serialization())
}
