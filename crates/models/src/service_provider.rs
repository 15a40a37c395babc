use sea_orm::entity::prelude::*;
use serde::Serialize;

use crate::{address, expense_type, user};

/// A provider always points at exactly one address row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "serviceproviders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub type_id: i32,
    pub address_id: i32,
    pub name: String,
    pub description: String,
    pub telephone: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Address,
    Type,
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Address => Entity::belongs_to(address::Entity)
                .from(Column::AddressId)
                .to(address::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Type => Entity::belongs_to(expense_type::Entity)
                .from(Column::TypeId)
                .to(expense_type::Column::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .into(),
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<address::Entity> for Entity {
    fn to() -> RelationDef { Relation::Address.def() }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl ActiveModelBehavior for ActiveModel {}
