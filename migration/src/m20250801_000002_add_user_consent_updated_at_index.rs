use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 期限切れ同意の一括削除は updated_at の範囲条件で走る
        manager
            .create_index(
                Index::create()
                    .name("idx_user_consent_updated_at")
                    .table(UserConsent::Table)
                    .col(UserConsent::UpdatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_user_consent_updated_at")
                    .table(UserConsent::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum UserConsent {
    Table,
    UpdatedAt,
}
