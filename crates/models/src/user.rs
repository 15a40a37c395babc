use sea_orm::entity::prelude::*;

use crate::{expense, service_provider};

/// Account row. `password` is an argon2 PHC string.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Expense,
    ServiceProvider,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Expense => Entity::has_many(expense::Entity).into(),
            Relation::ServiceProvider => Entity::has_many(service_provider::Entity).into(),
        }
    }
}

impl Related<expense::Entity> for Entity {
    fn to() -> RelationDef { Relation::Expense.def() }
}

impl Related<service_provider::Entity> for Entity {
    fn to() -> RelationDef { Relation::ServiceProvider.def() }
}

impl ActiveModelBehavior for ActiveModel {}
