use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select, SelectTwo, Set, TransactionTrait,
};
use tracing::{info, instrument};

use common::sanitize::Sanitize;
use models::{address, service_provider};

use super::domain::{ServiceProviderInput, ServiceProviderView};
use crate::address_service::insert_address;
use crate::errors::ServiceError;
use crate::validation::OwnerInput;

const NOT_FOUND: &str = "The service provider doesn't exist";
const ADDRESS_NOT_FOUND: &str = "The address for the service provider doesn't exist";
const ADDRESS_NOT_CREATED: &str = "Address couldn't be created";
const PROVIDER_NOT_CREATED: &str = "Service Provider couldn't be created";

/// Maps an insert that came back without a row to a dependency failure; other store errors pass through.
///
/// On Postgres the insert reads the row back through RETURNING, so a swallowed insert
/// surfaces as `RecordNotFound` rather than `RecordNotInserted`.
fn not_created(message: &'static str) -> impl Fn(ServiceError) -> ServiceError {
    move |e| match e {
        ServiceError::Db(DbErr::RecordNotFound(_) | DbErr::RecordNotInserted) => {
            ServiceError::DependencyCreate(message.to_string())
        }
        other => other,
    }
}

fn with_address(select: Select<service_provider::Entity>) -> SelectTwo<service_provider::Entity, address::Entity> {
    select
        .select_also(address::Entity)
        .join(JoinType::InnerJoin, service_provider::Relation::Address.def())
}

fn compose(row: (service_provider::Model, Option<address::Model>)) -> Result<ServiceProviderView, ServiceError> {
    let (sp, addr) = row;
    let addr = addr.ok_or_else(|| ServiceError::not_found(ADDRESS_NOT_FOUND))?;
    Ok(ServiceProviderView::compose(sp, addr).sanitize())
}

/// Transactional workflows over the provider + address pair.
#[derive(Clone)]
pub struct ServiceProviderService {
    db: DatabaseConnection,
}

impl ServiceProviderService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Insert the address, then the provider pointing at it. Both or neither persist.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: ServiceProviderInput) -> Result<ServiceProviderView, ServiceError> {
        let v = input.validate()?;

        let txn = self.db.begin().await?;
        let addr = insert_address(&txn, v.address)
            .await
            .map_err(not_created(ADDRESS_NOT_CREATED))?;
        let sp = service_provider::ActiveModel {
            user_id: Set(v.user_id),
            type_id: Set(v.type_id),
            address_id: Set(addr.id),
            name: Set(v.name),
            description: Set(v.description),
            telephone: Set(v.telephone),
            email: Set(v.email),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| not_created(PROVIDER_NOT_CREATED)(e.into()))?;
        txn.commit().await?;

        info!(service_provider_id = sp.id, address_id = addr.id, user_id = sp.user_id, "service_provider_created");
        Ok(ServiceProviderView::compose(sp, addr).sanitize())
    }

    pub async fn get(&self, id: i32) -> Result<ServiceProviderView, ServiceError> {
        let row = with_address(service_provider::Entity::find())
            .filter(service_provider::Column::Id.eq(id))
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found(NOT_FOUND))?;
        compose(row)
    }

    /// Every provider owned by `user_id`, ascending by id.
    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<ServiceProviderView>, ServiceError> {
        let rows = with_address(service_provider::Entity::find())
            .filter(service_provider::Column::UserId.eq(user_id))
            .order_by_asc(service_provider::Column::Id)
            .all(&self.db)
            .await?;
        rows.into_iter().map(compose).collect()
    }

    /// Update the provider matched by (id, user_id) and then its address.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: ServiceProviderInput) -> Result<ServiceProviderView, ServiceError> {
        let v = input.validate()?;

        let txn = self.db.begin().await?;
        let existing = service_provider::Entity::find_by_id(id)
            .filter(service_provider::Column::UserId.eq(v.user_id))
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found(NOT_FOUND))?;
        let address_id = existing.address_id;

        let mut am: service_provider::ActiveModel = existing.into();
        am.type_id = Set(v.type_id);
        am.name = Set(v.name);
        am.description = Set(v.description);
        am.telephone = Set(v.telephone);
        am.email = Set(v.email);
        let sp = am.update(&txn).await?;

        let mut addr_am: address::ActiveModel = address::Entity::find_by_id(address_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found(ADDRESS_NOT_FOUND))?
            .into();
        v.address.apply(&mut addr_am);
        let addr = addr_am.update(&txn).await?;
        txn.commit().await?;

        info!(service_provider_id = id, address_id, "service_provider_updated");
        Ok(ServiceProviderView::compose(sp, addr).sanitize())
    }

    /// Delete the provider matched by (id, user_id), then its address.
    #[instrument(skip(self, owner))]
    pub async fn delete(&self, id: i32, owner: OwnerInput) -> Result<(), ServiceError> {
        let user_id = owner.user_id()?;

        let txn = self.db.begin().await?;
        let existing = service_provider::Entity::find_by_id(id)
            .filter(service_provider::Column::UserId.eq(user_id))
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found(NOT_FOUND))?;

        service_provider::Entity::delete_by_id(existing.id).exec(&txn).await?;
        let res = address::Entity::delete_by_id(existing.address_id).exec(&txn).await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found(ADDRESS_NOT_FOUND));
        }
        txn.commit().await?;

        info!(service_provider_id = id, address_id = existing.address_id, user_id, "service_provider_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address_service::{get_address, AddressInput};
    use crate::errors::ErrorKind;
    use crate::test_support::{get_db, seed_owner};
    use sea_orm::ConnectionTrait;

    fn payload(user_id: i32, type_id: i32, name: &str) -> ServiceProviderInput {
        ServiceProviderInput {
            user_id: Some(user_id as i64),
            type_id: Some(type_id as i64),
            name: Some(name.into()),
            description: Some("Fixes leaks".into()),
            telephone: Some("(555) 010-0200".into()),
            email: Some("help@plumb.example".into()),
            address: Some(AddressInput {
                street: Some("12 Pipe Ln".into()),
                city: Some("Flowville".into()),
                state: Some("WA".into()),
                zipcode: Some("98001".into()),
            }),
        }
    }

    /// Installs a row trigger that silently drops inserts whose `column` starts with `no-row `.
    async fn drop_marked_inserts(db: &DatabaseConnection, table: &str, column: &str) -> Result<(), DbErr> {
        let func = format!("drop_marked_{}_insert", table);
        db.execute_unprepared(&format!(
            "CREATE OR REPLACE FUNCTION {func}() RETURNS trigger AS $$ \
             BEGIN IF NEW.{column} LIKE 'no-row %' THEN RETURN NULL; END IF; RETURN NEW; END; \
             $$ LANGUAGE plpgsql"
        ))
        .await?;
        db.execute_unprepared(&format!("DROP TRIGGER IF EXISTS {func} ON {table}")).await?;
        db.execute_unprepared(&format!(
            "CREATE TRIGGER {func} BEFORE INSERT ON {table} FOR EACH ROW EXECUTE FUNCTION {func}()"
        ))
        .await?;
        Ok(())
    }

    /// Installs a row trigger that rejects address updates moving `city` to `fail-update ...`.
    async fn reject_marked_address_updates(db: &DatabaseConnection) -> Result<(), DbErr> {
        db.execute_unprepared(
            "CREATE OR REPLACE FUNCTION reject_marked_address_update() RETURNS trigger AS $$ \
             BEGIN IF NEW.city LIKE 'fail-update %' THEN RAISE EXCEPTION 'address update refused'; END IF; \
             RETURN NEW; END; $$ LANGUAGE plpgsql",
        )
        .await?;
        db.execute_unprepared("DROP TRIGGER IF EXISTS reject_marked_address_update ON addresses").await?;
        db.execute_unprepared(
            "CREATE TRIGGER reject_marked_address_update BEFORE UPDATE ON addresses \
             FOR EACH ROW EXECUTE FUNCTION reject_marked_address_update()",
        )
        .await?;
        Ok(())
    }

    #[test]
    fn not_created_passes_other_errors_through() {
        let passthrough = not_created(ADDRESS_NOT_CREATED)(ServiceError::not_found("x"));
        assert!(matches!(passthrough, ServiceError::NotFound(_)));
        let conflict = not_created(ADDRESS_NOT_CREATED)(ServiceError::Conflict("dup".into()));
        assert!(matches!(conflict, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn swallowed_inserts_become_dependency_failures() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let svc = ServiceProviderService::new(db.clone());
        let (owner, type_id) = seed_owner(&db).await?;
        drop_marked_inserts(&db, "addresses", "street").await?;
        drop_marked_inserts(&db, "serviceproviders", "name").await?;

        let mut input = payload(owner, type_id, "Lost Address Co");
        if let Some(a) = input.address.as_mut() {
            a.street = Some(format!("no-row {}", uuid::Uuid::new_v4()));
        }
        let err = svc.create(input).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DependencyCreateFailed);
        assert_eq!((err.status(), err.to_string()), (404, ADDRESS_NOT_CREATED.to_string()));

        let marker = format!("kept {}", uuid::Uuid::new_v4());
        let mut input = payload(owner, type_id, &format!("no-row {}", uuid::Uuid::new_v4()));
        if let Some(a) = input.address.as_mut() {
            a.street = Some(marker.clone());
        }
        let err = svc.create(input).await.unwrap_err();
        assert_eq!((err.status(), err.to_string()), (404, PROVIDER_NOT_CREATED.to_string()));
        // The address inserted first goes away with the transaction
        let leaked = address::Entity::find()
            .filter(address::Column::Street.eq(marker))
            .one(&db)
            .await?;
        assert!(leaked.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn create_read_list_round_trip() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let svc = ServiceProviderService::new(db.clone());
        let (owner, type_id) = seed_owner(&db).await?;
        let (other, _) = seed_owner(&db).await?;

        let created = svc.create(payload(owner, type_id, "<script>alert(1)</script>Plumb Bros")).await?;
        assert_eq!(created.name, "Plumb Bros");
        assert_eq!(created.address_id, created.address.id);
        assert_eq!(created.address.street, "12 Pipe Ln");
        assert_eq!(created.address.zipcode, "98001");

        assert_eq!(svc.get(created.id).await?, created);

        let second = svc.create(payload(owner, type_id, "Second")).await?;
        let _foreign = svc.create(payload(other, type_id, "Foreign")).await?;
        let listed = svc.list_by_user(owner).await?;
        assert_eq!(listed.iter().map(|s| s.id).collect::<Vec<_>>(), vec![created.id, second.id]);
        assert!(listed.iter().all(|s| s.user_id == owner));

        // An owner without providers gets an empty list, not an error
        let (lonely, _) = seed_owner(&db).await?;
        assert!(svc.list_by_user(lonely).await?.is_empty());

        let err = svc.get(i32::MAX).await.unwrap_err();
        assert_eq!((err.status(), err.to_string()), (404, NOT_FOUND.to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn failed_provider_insert_rolls_back_address() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let svc = ServiceProviderService::new(db.clone());
        let (owner, _) = seed_owner(&db).await?;

        let marker = format!("rollback {}", uuid::Uuid::new_v4());
        let mut input = payload(owner, i32::MAX, "Ghost");
        if let Some(a) = input.address.as_mut() {
            a.street = Some(marker.clone());
        }
        // Unknown type id violates the foreign key after the address insert
        let err = svc.create(input).await.unwrap_err();
        assert_eq!(err.status(), 409);
        let leaked = address::Entity::find()
            .filter(address::Column::Street.eq(marker))
            .one(&db)
            .await?;
        assert!(leaked.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn update_is_scoped_to_owner() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let svc = ServiceProviderService::new(db.clone());
        let (owner, type_id) = seed_owner(&db).await?;
        let (other, _) = seed_owner(&db).await?;
        let created = svc.create(payload(owner, type_id, "Before")).await?;

        let err = svc.update(created.id, payload(other, type_id, "Hijack")).await.unwrap_err();
        assert_eq!(err.to_string(), NOT_FOUND);

        let mut changed = payload(owner, type_id, "After");
        if let Some(a) = changed.address.as_mut() {
            a.city = Some("Newtown".into());
        }
        let updated = svc.update(created.id, changed).await?;
        assert_eq!(updated.name, "After");
        assert_eq!(updated.address.city, "Newtown");
        assert_eq!(updated.address_id, created.address_id);
        assert_eq!(svc.get(created.id).await?, updated);
        Ok(())
    }

    #[tokio::test]
    async fn failed_address_update_rolls_back_provider_update() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let svc = ServiceProviderService::new(db.clone());
        let (owner, type_id) = seed_owner(&db).await?;
        reject_marked_address_updates(&db).await?;
        let created = svc.create(payload(owner, type_id, "Steady Electric")).await?;

        let mut changed = payload(owner, type_id, "Renamed Electric");
        if let Some(a) = changed.address.as_mut() {
            a.city = Some("fail-update Nowhere".into());
        }
        let err = svc.update(created.id, changed).await.unwrap_err();
        assert_eq!(err.status(), 500);

        let after = svc.get(created.id).await?;
        assert_eq!(after.name, "Steady Electric");
        assert_eq!(after, created);
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_both_rows() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let svc = ServiceProviderService::new(db.clone());
        let (owner, type_id) = seed_owner(&db).await?;
        let (other, _) = seed_owner(&db).await?;
        let created = svc.create(payload(owner, type_id, "Doomed")).await?;

        let err = svc.delete(created.id, OwnerInput { user_id: Some(other as i64) }).await.unwrap_err();
        assert_eq!(err.status(), 404);
        assert!(svc.get(created.id).await.is_ok());

        svc.delete(created.id, OwnerInput { user_id: Some(owner as i64) }).await?;
        assert_eq!(svc.get(created.id).await.unwrap_err().to_string(), NOT_FOUND);
        assert_eq!(get_address(&db, created.address_id).await.unwrap_err().status(), 404);

        let err = svc.delete(created.id, OwnerInput { user_id: None }).await.unwrap_err();
        assert_eq!(err.to_string(), "user_id is mandatory");
        Ok(())
    }
}
