//! Migrator registering table migrations in foreign-key order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_types;
mod m20240101_000003_create_addresses;
mod m20240101_000004_create_serviceproviders;
mod m20240101_000005_create_expenses;
mod m20240101_000006_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_types::Migration),
            Box::new(m20240101_000003_create_addresses::Migration),
            Box::new(m20240101_000004_create_serviceproviders::Migration),
            Box::new(m20240101_000005_create_expenses::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000006_add_indexes::Migration),
        ]
    }
}
