use std::sync::Arc;

use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use rand::rngs::OsRng;
use tracing::{debug, info, instrument};

use super::domain::{AuthSession, AuthUser, ChangePasswordInput, Claims, CredentialsInput, StoredUser};
use super::errors::AuthError;
use super::repository::AuthRepository;

/// Auth service configuration
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    pub token_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self { Self { jwt_secret: None, token_ttl_hours: 12 } }
}

fn required(key: &str, value: Option<String>) -> Result<String, AuthError> {
    crate::validation::text(key, value).map_err(|e| AuthError::Validation(e.to_string()))
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Register a new user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::CredentialsInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig::default());
    /// let input = CredentialsInput { username: Some("maria".into()), password: Some("Secret123".into()) };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.username, "maria");
    /// ```
    #[instrument(skip(self, input), fields(username = ?input.username))]
    pub async fn register(&self, input: CredentialsInput) -> Result<AuthUser, AuthError> {
        let username = required("username", input.username)?;
        let password = required("password", input.password)?;
        if let Some(existing) = self.repo.find_by_username(&username).await? {
            debug!("user exists: {}", existing.username);
            return Err(AuthError::Conflict);
        }

        let hash = hash_password(&password)?;
        let user = self.repo.create_user(&username, hash).await?;
        info!(user_id = user.id, username = %user.username, "user_registered");
        Ok(user)
    }

    /// Authenticate a user and optionally issue a token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::CredentialsInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo.clone(), AuthConfig { jwt_secret: Some("secret".into()), token_ttl_hours: 1 });
    /// let creds = || CredentialsInput { username: Some("u1".into()), password: Some("Passw0rd".into()) };
    /// let _ = tokio_test::block_on(svc.register(creds()));
    /// let session = tokio_test::block_on(svc.login(creds())).unwrap();
    /// assert_eq!(session.user.username, "u1");
    /// assert!(session.token.is_some());
    /// ```
    #[instrument(skip(self, input), fields(username = ?input.username))]
    pub async fn login(&self, input: CredentialsInput) -> Result<AuthSession, AuthError> {
        let stored = self.verify(input.username, input.password).await?;
        let token = self.issue_token(&stored)?;
        Ok(AuthSession { user: stored.into(), token })
    }

    /// Verify the current password, then store a hash of the new one.
    #[instrument(skip(self, input), fields(username = ?input.username))]
    pub async fn change_password(&self, input: ChangePasswordInput) -> Result<AuthUser, AuthError> {
        let new_password = required("newPassword", input.new_password)?;
        let stored = self.verify(input.username, input.password).await?;
        let hash = hash_password(&new_password)?;
        let user = self.repo.update_password(stored.id, hash).await?;
        info!(user_id = user.id, "password_changed");
        Ok(user)
    }

    /// Verify the password, then remove the account. Returns rows removed.
    #[instrument(skip(self, input), fields(username = ?input.username))]
    pub async fn delete(&self, input: CredentialsInput) -> Result<u64, AuthError> {
        let stored = self.verify(input.username, input.password).await?;
        let removed = self.repo.delete_user(stored.id).await?;
        info!(user_id = stored.id, removed, "user_deleted");
        Ok(removed)
    }

    /// Decode a token issued by [`AuthService::login`].
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode_token(self.cfg.jwt_secret.as_deref(), token)
    }

    async fn verify(&self, username: Option<String>, password: Option<String>) -> Result<StoredUser, AuthError> {
        let username = required("username", username)?;
        let password = required("password", password)?;
        let stored = self.repo.find_by_username(&username).await?.ok_or(AuthError::NotFound)?;

        let parsed = PasswordHash::new(&stored.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default().verify_password(password.as_bytes(), &parsed).is_err() {
            return Err(AuthError::Unauthorized);
        }
        Ok(stored)
    }

    fn issue_token(&self, user: &StoredUser) -> Result<Option<String>, AuthError> {
        let Some(secret) = &self.cfg.jwt_secret else { return Ok(None) };
        let exp = (chrono::Utc::now() + chrono::Duration::hours(self.cfg.token_ttl_hours)).timestamp() as usize;
        let claims = Claims { sub: user.username.clone(), uid: user.id, exp };
        let token = encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
            .map_err(|e| AuthError::TokenError(e.to_string()))?;
        Ok(Some(token))
    }
}

/// Validate an HS256 token against `secret`; fails when no secret is configured.
pub fn decode_token(secret: Option<&str>, token: &str) -> Result<Claims, AuthError> {
    let secret = secret.ok_or_else(|| AuthError::TokenError("token auth disabled".into()))?;
    let data = decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &Validation::default())
        .map_err(|e| AuthError::TokenError(e.to_string()))?;
    Ok(data.claims)
}

fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::HashError(e.to_string()))?
        .to_string())
}
