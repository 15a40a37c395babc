//! Service provider aggregate: a provider row plus the address row it owns.
//!
//! Writes touch both rows inside one transaction; reads join them and return
//! the address nested under the provider.

pub mod domain;
pub mod service;

pub use service::ServiceProviderService;
