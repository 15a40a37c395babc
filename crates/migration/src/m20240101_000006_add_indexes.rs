use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ServiceProviders: listed per user
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_serviceproviders_user")
                    .table(ServiceProviders::Table)
                    .col(ServiceProviders::UserId)
                    .to_owned(),
            )
            .await?;

        // One provider per address
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_serviceproviders_address")
                    .table(ServiceProviders::Table)
                    .col(ServiceProviders::AddressId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Expenses: listed per user, ordered by date
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_expenses_user_date")
                    .table(Expenses::Table)
                    .col(Expenses::UserId)
                    .col(Expenses::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_expenses_user_date").table(Expenses::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_serviceproviders_address").table(ServiceProviders::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_serviceproviders_user").table(ServiceProviders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ServiceProviders {
    #[sea_orm(iden = "serviceproviders")]
    Table,
    UserId,
    AddressId,
}

#[derive(DeriveIden)]
enum Expenses { Table, UserId, Date }
