use common::sanitize::{clean, Sanitize};
use serde::{Deserialize, Serialize};

/// Registration, login and delete input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Password change input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangePasswordInput {
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "newPassword")]
    pub new_password: Option<String>,
}

/// Public view of an account; never carries the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i32,
    pub username: String,
}

/// Account as persisted
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
}

impl From<StoredUser> for AuthUser {
    fn from(u: StoredUser) -> Self { Self { id: u.id, username: u.username } }
}

/// Login result (session)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    #[serde(flatten)]
    pub user: AuthUser,
    pub token: Option<String>,
}

/// JWT claims issued on login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub uid: i32,
    pub exp: usize,
}

impl Sanitize for AuthUser {
    fn sanitize(self) -> Self {
        Self { id: self.id, username: clean(&self.username) }
    }
}

impl Sanitize for AuthSession {
    fn sanitize(self) -> Self {
        Self { user: self.user.sanitize(), token: self.token }
    }
}
