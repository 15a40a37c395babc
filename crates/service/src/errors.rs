use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::auth::errors::AuthError;

/// Coarse classification used by the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ValidationFailed,
    NotFound,
    DependencyCreateFailed,
    Unauthorized,
    Conflict,
    StoreFailure,
    Internal,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    /// A row the operation depends on was not produced by the store.
    #[error("{0}")]
    DependencyCreate(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(#[from] DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(message: &str) -> Self { Self::NotFound(message.to_string()) }

    pub fn mandatory(key: &str) -> Self { Self::Validation(format!("{} is mandatory", key)) }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Validation(_) => ErrorKind::ValidationFailed,
            ServiceError::NotFound(_) => ErrorKind::NotFound,
            ServiceError::DependencyCreate(_) => ErrorKind::DependencyCreateFailed,
            ServiceError::Unauthorized(_) => ErrorKind::Unauthorized,
            ServiceError::Conflict(_) => ErrorKind::Conflict,
            ServiceError::Db(_) => ErrorKind::StoreFailure,
            ServiceError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 400,
            ServiceError::NotFound(_) | ServiceError::DependencyCreate(_) => 404,
            ServiceError::Unauthorized(_) => 401,
            ServiceError::Conflict(_) => 409,
            ServiceError::Db(e) if constraint_violation(e).is_some() => 409,
            ServiceError::Db(_) | ServiceError::Internal(_) => 500,
        }
    }

    /// Message safe to return to clients; store and internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::Db(e) => match constraint_violation(e) {
                Some(SqlErr::UniqueConstraintViolation(_)) => "The record already exists".to_string(),
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    "The record references missing data or is still referenced".to_string()
                }
                _ => "Database operation failed".to_string(),
            },
            ServiceError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

fn constraint_violation(e: &DbErr) -> Option<SqlErr> {
    match e.sql_err() {
        Some(err @ SqlErr::UniqueConstraintViolation(_)) => Some(err),
        Some(err @ SqlErr::ForeignKeyConstraintViolation(_)) => Some(err),
        _ => None,
    }
}

impl From<AuthError> for ServiceError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Validation(msg) => ServiceError::Validation(msg),
            AuthError::Conflict => ServiceError::Conflict("The username already exists".into()),
            AuthError::NotFound => ServiceError::NotFound("User doesn't exist".into()),
            AuthError::Unauthorized => ServiceError::Unauthorized("password is invalid".into()),
            AuthError::HashError(msg) | AuthError::TokenError(msg) => ServiceError::Internal(msg),
            AuthError::Repository(db) => ServiceError::Db(db),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_kind() {
        assert_eq!(ServiceError::mandatory("name").status(), 400);
        assert_eq!(ServiceError::not_found("The type doesn't exist").status(), 404);
        assert_eq!(ServiceError::DependencyCreate("Address couldn't be created".into()).status(), 404);
        assert_eq!(ServiceError::Unauthorized("x".into()).status(), 401);
        assert_eq!(ServiceError::Conflict("x".into()).status(), 409);
        assert_eq!(ServiceError::Internal("boom".into()).status(), 500);
    }

    #[test]
    fn plain_db_error_is_500_with_generic_message() {
        let err = ServiceError::from(DbErr::Custom("connection reset".into()));
        assert_eq!(err.kind(), ErrorKind::StoreFailure);
        assert_eq!(err.status(), 500);
        assert_eq!(err.public_message(), "Database operation failed");
    }

    #[test]
    fn mandatory_message_names_the_key() {
        assert_eq!(ServiceError::mandatory("user_id").public_message(), "user_id is mandatory");
    }

    #[test]
    fn auth_errors_map_to_user_messages() {
        let e: ServiceError = AuthError::NotFound.into();
        assert_eq!((e.status(), e.public_message()), (404, "User doesn't exist".to_string()));
        let e: ServiceError = AuthError::Unauthorized.into();
        assert_eq!((e.status(), e.public_message()), (401, "password is invalid".to_string()));
        let e: ServiceError = AuthError::HashError("bad salt".into()).into();
        assert_eq!((e.status(), e.public_message()), (500, "Internal server error".to_string()));
    }
}
