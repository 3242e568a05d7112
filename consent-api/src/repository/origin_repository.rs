// src/repository/origin_repository.rs

use crate::domain::origin_model::{ActiveModel as OriginActiveModel, Column, Entity as OriginEntity};
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{entity::*, query::*, DbConn, DbErr, Set};

pub struct OriginRepository {
    db: DbConn,
}

impl OriginRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// 既知のオリジンを昇順で取得
    pub async fn find_all_origins(&self) -> Result<Vec<String>, DbErr> {
        OriginEntity::find()
            .select_only()
            .column(Column::Origin)
            .order_by_asc(Column::Origin)
            .into_tuple::<String>()
            .all(&self.db)
            .await
    }

    /// 登録済みなら updated_at のみ更新
    pub async fn upsert(&self, origin: String) -> Result<(), DbErr> {
        let now = Utc::now();
        let active = OriginActiveModel {
            origin: Set(origin),
            created_at: Set(now),
            updated_at: Set(now),
        };

        OriginEntity::insert(active)
            .on_conflict(
                OnConflict::column(Column::Origin)
                    .update_column(Column::UpdatedAt)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }
}
