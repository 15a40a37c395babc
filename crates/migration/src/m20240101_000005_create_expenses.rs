//! Create `expenses` with FKs to `users` and `types`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(pk_auto(Expenses::Id))
                    .col(integer(Expenses::UserId).not_null())
                    .col(integer(Expenses::TypeId).not_null())
                    .col(decimal_len(Expenses::Amount, 12, 2).not_null())
                    .col(string_len(Expenses::Name, 255).not_null())
                    .col(text(Expenses::Description).not_null())
                    .col(date(Expenses::Date).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expenses_user")
                            .from(Expenses::Table, Expenses::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expenses_type")
                            .from(Expenses::Table, Expenses::TypeId)
                            .to(Types::Table, Types::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Expenses::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Expenses { Table, Id, UserId, TypeId, Amount, Name, Description, Date }

#[derive(DeriveIden)]
enum Users { Table, Id }

#[derive(DeriveIden)]
enum Types { Table, Id }
