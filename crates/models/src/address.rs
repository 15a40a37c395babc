use sea_orm::entity::prelude::*;
use serde::Serialize;

use crate::service_provider;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ServiceProvider,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ServiceProvider => Entity::has_one(service_provider::Entity).into(),
        }
    }
}

impl Related<service_provider::Entity> for Entity {
    fn to() -> RelationDef { Relation::ServiceProvider.def() }
}

impl ActiveModelBehavior for ActiveModel {}
