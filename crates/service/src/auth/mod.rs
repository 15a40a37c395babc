//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Registration, login, password change and account removal live here; the
//! HTTP layer only maps inputs and errors.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::AuthService;
