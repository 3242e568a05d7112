// src/service/origin_service.rs

use crate::db::DbPool;
use crate::domain::origin_model::normalize_origin;
use crate::error::{AppError, AppResult};
use crate::repository::origin_repository::OriginRepository;
use tracing::info;

pub struct OriginService {
    repo: OriginRepository,
}

impl OriginService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: OriginRepository::new(db_pool),
        }
    }

    pub async fn list_origins(&self) -> AppResult<Vec<String>> {
        Ok(self.repo.find_all_origins().await?)
    }

    /// 正規化したオリジンを登録し、その値を返す
    pub async fn register_origin(&self, raw: &str) -> AppResult<String> {
        let origin = normalize_origin(raw).map_err(AppError::ValidationError)?;
        self.repo.upsert(origin.clone()).await?;
        Ok(origin)
    }

    /// 起動時に設定値のオリジンをまとめて登録
    pub async fn register_all(&self, origins: &[String]) -> AppResult<usize> {
        for raw in origins {
            let origin = self.register_origin(raw).await?;
            info!(origin = %origin, "Known origin registered");
        }
        Ok(origins.len())
    }
}
