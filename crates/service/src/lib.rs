//! Service layer providing business-oriented operations on top of models.
//! - Validates payloads field by field before touching the store.
//! - Sanitizes every string on the way out.
//! - Returns `ServiceError` so the HTTP layer has one error type to map.

pub mod errors;
pub mod validation;
pub mod auth;
pub mod type_service;
pub mod address_service;
pub mod expense_service;
pub mod service_provider;
#[cfg(test)]
pub mod test_support;
