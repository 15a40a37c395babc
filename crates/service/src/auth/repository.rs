use async_trait::async_trait;

use super::domain::{AuthUser, StoredUser};
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, AuthError>;
    async fn create_user(&self, username: &str, password_hash: String) -> Result<AuthUser, AuthError>;
    async fn update_password(&self, user_id: i32, password_hash: String) -> Result<AuthUser, AuthError>;
    /// Returns the number of rows removed.
    async fn delete_user(&self, user_id: i32) -> Result<u64, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use sea_orm::DbErr;
    use std::collections::HashMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct MockAuthRepository {
        users: Mutex<HashMap<String, StoredUser>>, // key: username
        next_id: Mutex<i32>,
    }

    fn poisoned() -> AuthError {
        AuthError::Repository(DbErr::Custom("mock repository lock poisoned".into()))
    }

    impl MockAuthRepository {
        fn users(&self) -> Result<MutexGuard<'_, HashMap<String, StoredUser>>, AuthError> {
            self.users.lock().map_err(|_| poisoned())
        }
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, AuthError> {
            Ok(self.users()?.get(username).cloned())
        }

        async fn create_user(&self, username: &str, password_hash: String) -> Result<AuthUser, AuthError> {
            let mut users = self.users()?;
            if users.contains_key(username) {
                return Err(AuthError::Conflict);
            }
            let mut next = self.next_id.lock().map_err(|_| poisoned())?;
            *next += 1;
            let stored = StoredUser { id: *next, username: username.to_string(), password_hash };
            users.insert(username.to_string(), stored.clone());
            Ok(stored.into())
        }

        async fn update_password(&self, user_id: i32, password_hash: String) -> Result<AuthUser, AuthError> {
            let mut users = self.users()?;
            let found = users.values_mut().find(|u| u.id == user_id).ok_or(AuthError::NotFound)?;
            found.password_hash = password_hash;
            Ok(found.clone().into())
        }

        async fn delete_user(&self, user_id: i32) -> Result<u64, AuthError> {
            let mut users = self.users()?;
            let before = users.len();
            users.retain(|_, u| u.id != user_id);
            Ok((before - users.len()) as u64)
        }
    }
}
