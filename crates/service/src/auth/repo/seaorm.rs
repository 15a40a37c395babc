use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::auth::domain::{AuthUser, StoredUser};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;
use models::user;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAuthRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, AuthError> {
        let res = user::Entity::find()
            .filter(user::Column::Username.eq(username.to_string()))
            .one(&self.db)
            .await?;
        Ok(res.map(|u| StoredUser { id: u.id, username: u.username, password_hash: u.password }))
    }

    async fn create_user(&self, username: &str, password_hash: String) -> Result<AuthUser, AuthError> {
        let created = user::ActiveModel {
            username: Set(username.to_string()),
            password: Set(password_hash),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(AuthUser { id: created.id, username: created.username })
    }

    async fn update_password(&self, user_id: i32, password_hash: String) -> Result<AuthUser, AuthError> {
        let mut am: user::ActiveModel = user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or(AuthError::NotFound)?
            .into();
        am.password = Set(password_hash);
        let updated = am.update(&self.db).await?;
        Ok(AuthUser { id: updated.id, username: updated.username })
    }

    async fn delete_user(&self, user_id: i32) -> Result<u64, AuthError> {
        let res = user::Entity::delete_by_id(user_id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }
}
