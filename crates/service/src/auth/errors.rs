use sea_orm::DbErr;
use thiserror::Error;

/// Failures of the user account workflows: registration, login, password change and removal.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A mandatory credential field was missing or blank; carries "<field> is mandatory".
    #[error("{0}")]
    Validation(String),
    #[error("username is already registered")]
    Conflict,
    #[error("no user with that username")]
    NotFound,
    #[error("password does not match")]
    Unauthorized,
    #[error("password hashing failed: {0}")]
    HashError(String),
    #[error("token handling failed: {0}")]
    TokenError(String),
    #[error("user store error: {0}")]
    Repository(#[from] DbErr),
}

impl AuthError {
    /// Numeric code attached to the `auth error` debug event at the HTTP boundary.
    ///
    /// Codes never reach the response body. Client mistakes sit in the 1000 range,
    /// credential processing in 1100 and the user store in 1200.
    pub fn code(&self) -> u16 {
        match self {
            AuthError::Validation(_) => 1001,
            AuthError::Conflict => 1002,
            AuthError::NotFound => 1003,
            AuthError::Unauthorized => 1004,
            AuthError::HashError(_) => 1101,
            AuthError::TokenError(_) => 1102,
            AuthError::Repository(_) => 1200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_group_by_origin() {
        assert_eq!(AuthError::Validation("username is mandatory".into()).code(), 1001);
        assert_eq!(AuthError::Unauthorized.code(), 1004);
        assert_eq!(AuthError::TokenError("expired".into()).code() / 100, 11);
        assert_eq!(AuthError::Repository(DbErr::Custom("down".into())).code(), 1200);
    }

    #[test]
    fn validation_keeps_field_message() {
        let e = AuthError::Validation("password is mandatory".into());
        assert_eq!(e.to_string(), "password is mandatory");
    }
}
