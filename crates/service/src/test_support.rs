#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use migration::MigratorTrait;
use configs::DatabaseConfig;
use models::db::connect_with_config;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Connected and migrated test database, or `None` when DB tests are skipped or unreachable.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let mut cfg = DatabaseConfig::for_tests();
    if cfg.url.is_empty() {
        return None;
    }
    cfg.max_connections = cfg.max_connections.max(10);

    let migrated = *MIGRATED
        .get_or_init(|| async {
            let db = match connect_with_config(&DatabaseConfig::for_tests()).await {
                Ok(db) => db,
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    return false;
                }
            };
            match migration::Migrator::up(&db, None).await {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("skip: migrate up failed: {}", e);
                    false
                }
            }
        })
        .await;
    if !migrated {
        return None;
    }

    // Fresh pool for the current test's runtime
    connect_with_config(&cfg).await.ok()
}

/// Insert a user with a unique name and a type; returns `(user_id, type_id)`.
pub async fn seed_owner(db: &DatabaseConnection) -> anyhow::Result<(i32, i32)> {
    let user = models::user::ActiveModel {
        username: Set(format!("svc_user_{}", uuid::Uuid::new_v4())),
        password: Set("unused".into()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    let kind = models::expense_type::ActiveModel {
        name: Set("Home".into()),
        description: Set("Household".into()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok((user.id, kind.id))
}
