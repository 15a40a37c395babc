//! Per-field rules for incoming payloads.
//!
//! Input structs hold every field as `Option` so a missing key and a wrong value
//! are both reported by name. Each entity checks its fields in declaration order
//! with the functions below and stops at the first failure.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Upper bound for `numeric(12,2)` columns.
const MAX_AMOUNT: i64 = 10_000_000_000;

/// Required string, non-empty after trimming.
pub fn text(key: &str, value: Option<String>) -> Result<String, ServiceError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ServiceError::mandatory(key)),
    }
}

/// Required, strictly positive identifier.
pub fn id(key: &str, value: Option<i64>) -> Result<i32, ServiceError> {
    let v = value.ok_or_else(|| ServiceError::mandatory(key))?;
    if v <= 0 {
        return Err(ServiceError::Validation(format!("{} must be a positive integer", key)));
    }
    i32::try_from(v).map_err(|_| ServiceError::Validation(format!("{} is out of range", key)))
}

/// Required decimal; zero is allowed, negatives are not. Rounded to cents.
pub fn amount(key: &str, value: Option<Decimal>) -> Result<Decimal, ServiceError> {
    let v = value.ok_or_else(|| ServiceError::mandatory(key))?;
    if v.is_sign_negative() && !v.is_zero() {
        return Err(ServiceError::Validation(format!("{} must be zero or greater", key)));
    }
    if v >= Decimal::from(MAX_AMOUNT) {
        return Err(ServiceError::Validation(format!("{} is too large", key)));
    }
    Ok(v.round_dp(2))
}

/// Required calendar date in `YYYY-MM-DD` or `MM/DD/YYYY`.
pub fn date(key: &str, value: Option<String>) -> Result<NaiveDate, ServiceError> {
    let raw = text(key, value)?;
    parse_date(raw.trim())
        .ok_or_else(|| ServiceError::Validation(format!("{} must be a date formatted YYYY-MM-DD or MM/DD/YYYY", key)))
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .ok()
}

/// Body of owner-scoped deletes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OwnerInput {
    pub user_id: Option<i64>,
}

impl OwnerInput {
    pub fn user_id(self) -> Result<i32, ServiceError> {
        id("user_id", self.user_id)
    }
}
