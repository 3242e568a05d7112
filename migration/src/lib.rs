// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// 同意ステータス関連マイグレーション
mod m20250801_000001_create_user_consent_table;
mod m20250801_000002_add_user_consent_updated_at_index;

// オリジン関連マイグレーション
mod m20250801_000003_create_origin_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_user_consent_table::Migration),
            // purge クエリ用のインデックス
            Box::new(m20250801_000002_add_user_consent_updated_at_index::Migration),
            Box::new(m20250801_000003_create_origin_table::Migration),
        ]
    }
}
