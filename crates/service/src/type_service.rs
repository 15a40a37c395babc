use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use common::sanitize::{clean, Sanitize};
use models::expense_type;

use crate::errors::ServiceError;
use crate::validation;

const NOT_FOUND: &str = "The type doesn't exist";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeView {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<expense_type::Model> for TypeView {
    fn from(m: expense_type::Model) -> Self {
        Self { id: m.id, name: m.name, description: m.description }
    }
}

impl Sanitize for TypeView {
    fn sanitize(self) -> Self {
        Self { id: self.id, name: clean(&self.name), description: clean(&self.description) }
    }
}

struct ValidType {
    name: String,
    description: String,
}

impl TypeInput {
    fn validate(self) -> Result<ValidType, ServiceError> {
        Ok(ValidType {
            name: validation::text("name", self.name)?,
            description: validation::text("description", self.description)?,
        })
    }
}

#[instrument(skip(db, input))]
pub async fn create_type(db: &DatabaseConnection, input: TypeInput) -> Result<TypeView, ServiceError> {
    let v = input.validate()?;
    let created = expense_type::ActiveModel {
        name: Set(v.name),
        description: Set(v.description),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!(type_id = created.id, "type_created");
    Ok(TypeView::from(created).sanitize())
}

pub async fn get_type(db: &DatabaseConnection, id: i32) -> Result<TypeView, ServiceError> {
    let found = expense_type::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(NOT_FOUND))?;
    Ok(TypeView::from(found).sanitize())
}

/// All types ordered by id.
pub async fn list_types(db: &DatabaseConnection) -> Result<Vec<TypeView>, ServiceError> {
    let rows = expense_type::Entity::find()
        .order_by_asc(expense_type::Column::Id)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(TypeView::from).collect::<Vec<_>>().sanitize())
}

#[instrument(skip(db, input))]
pub async fn update_type(db: &DatabaseConnection, id: i32, input: TypeInput) -> Result<TypeView, ServiceError> {
    let v = input.validate()?;
    let mut am: expense_type::ActiveModel = expense_type::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(NOT_FOUND))?
        .into();
    am.name = Set(v.name);
    am.description = Set(v.description);
    let updated = am.update(db).await?;
    info!(type_id = id, "type_updated");
    Ok(TypeView::from(updated).sanitize())
}

/// Fails with a store conflict while expenses or providers still use the type.
#[instrument(skip(db))]
pub async fn delete_type(db: &DatabaseConnection, id: i32) -> Result<u64, ServiceError> {
    let res = expense_type::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(NOT_FOUND));
    }
    info!(type_id = id, "type_deleted");
    Ok(res.rows_affected)
}
