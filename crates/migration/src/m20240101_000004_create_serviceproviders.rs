//! Create `serviceproviders` with FKs to `users`, `types` and `addresses`.
//!
//! Removing an address removes the provider that points at it; a type in use cannot be removed.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceProviders::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceProviders::Id))
                    .col(integer(ServiceProviders::UserId).not_null())
                    .col(integer(ServiceProviders::TypeId).not_null())
                    .col(integer(ServiceProviders::AddressId).not_null())
                    .col(string_len(ServiceProviders::Name, 255).not_null())
                    .col(text(ServiceProviders::Description).not_null())
                    .col(string_len(ServiceProviders::Telephone, 64).not_null())
                    .col(string_len(ServiceProviders::Email, 255).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_serviceproviders_user")
                            .from(ServiceProviders::Table, ServiceProviders::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_serviceproviders_type")
                            .from(ServiceProviders::Table, ServiceProviders::TypeId)
                            .to(Types::Table, Types::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_serviceproviders_address")
                            .from(ServiceProviders::Table, ServiceProviders::AddressId)
                            .to(Addresses::Table, Addresses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceProviders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceProviders {
    #[sea_orm(iden = "serviceproviders")]
    Table,
    Id,
    UserId,
    TypeId,
    AddressId,
    Name,
    Description,
    Telephone,
    Email,
}

#[derive(DeriveIden)]
enum Users { Table, Id }

#[derive(DeriveIden)]
enum Types { Table, Id }

#[derive(DeriveIden)]
enum Addresses { Table, Id }
