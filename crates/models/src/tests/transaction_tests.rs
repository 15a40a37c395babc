use crate::address;
use super::setup_test_db;
use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};

fn sample() -> address::ActiveModel {
    address::ActiveModel {
        street: Set("1 Main St".into()),
        city: Set("Austin".into()),
        state: Set("TX".into()),
        zipcode: Set("73301".into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let txn = db.begin().await?;
    let created = sample().insert(&txn).await?;
    txn.commit().await?;

    assert!(address::Entity::find_by_id(created.id).one(&db).await?.is_some());
    address::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

/// Dropping an uncommitted transaction discards its writes
#[tokio::test]
async fn test_transaction_dropped_rolls_back() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let id = {
        let txn = db.begin().await?;
        let created = sample().insert(&txn).await?;
        created.id
    };

    assert!(address::Entity::find_by_id(id).one(&db).await?.is_none());
    Ok(())
}
