use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use common::sanitize::{clean, Sanitize};
use models::address;

use crate::errors::ServiceError;
use crate::validation;

const NOT_FOUND: &str = "The address doesn't exist";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressInput {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressView {
    pub id: i32,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

impl From<address::Model> for AddressView {
    fn from(m: address::Model) -> Self {
        Self { id: m.id, street: m.street, city: m.city, state: m.state, zipcode: m.zipcode }
    }
}

impl Sanitize for AddressView {
    fn sanitize(self) -> Self {
        Self {
            id: self.id,
            street: clean(&self.street),
            city: clean(&self.city),
            state: clean(&self.state),
            zipcode: clean(&self.zipcode),
        }
    }
}

/// Address fields after validation.
#[derive(Debug, Clone)]
pub struct ValidAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

impl AddressInput {
    pub fn validate(self) -> Result<ValidAddress, ServiceError> {
        Ok(ValidAddress {
            street: validation::text("street", self.street)?,
            city: validation::text("city", self.city)?,
            state: validation::text("state", self.state)?,
            zipcode: validation::text("zipcode", self.zipcode)?,
        })
    }
}

impl ValidAddress {
    pub(crate) fn apply(self, am: &mut address::ActiveModel) {
        am.street = Set(self.street);
        am.city = Set(self.city);
        am.state = Set(self.state);
        am.zipcode = Set(self.zipcode);
    }
}

/// Insert on any connection, so the composite workflow can run it inside its transaction.
pub(crate) async fn insert_address<C: ConnectionTrait>(conn: &C, v: ValidAddress) -> Result<address::Model, ServiceError> {
    let mut am = address::ActiveModel { ..Default::default() };
    v.apply(&mut am);
    Ok(am.insert(conn).await?)
}

#[instrument(skip(db, input))]
pub async fn create_address(db: &DatabaseConnection, input: AddressInput) -> Result<AddressView, ServiceError> {
    let created = insert_address(db, input.validate()?).await?;
    info!(address_id = created.id, "address_created");
    Ok(AddressView::from(created).sanitize())
}

pub async fn get_address(db: &DatabaseConnection, id: i32) -> Result<AddressView, ServiceError> {
    let found = address::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(NOT_FOUND))?;
    Ok(AddressView::from(found).sanitize())
}

#[instrument(skip(db, input))]
pub async fn update_address(db: &DatabaseConnection, id: i32, input: AddressInput) -> Result<AddressView, ServiceError> {
    let v = input.validate()?;
    let mut am: address::ActiveModel = address::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(NOT_FOUND))?
        .into();
    v.apply(&mut am);
    let updated = am.update(db).await?;
    info!(address_id = id, "address_updated");
    Ok(AddressView::from(updated).sanitize())
}

/// Removing an address also removes the service provider that points at it.
#[instrument(skip(db))]
pub async fn delete_address(db: &DatabaseConnection, id: i32) -> Result<u64, ServiceError> {
    let res = address::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(NOT_FOUND));
    }
    info!(address_id = id, "address_deleted");
    Ok(res.rows_affected)
}
