use serde::{Deserialize, Serialize};

use common::sanitize::{clean, Sanitize};
use models::{address, service_provider};

use crate::address_service::{AddressInput, AddressView, ValidAddress};
use crate::errors::ServiceError;
use crate::validation;

/// Create and update payload with the address nested inside.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceProviderInput {
    pub user_id: Option<i64>,
    pub type_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub address: Option<AddressInput>,
}

/// Provider with its address nested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceProviderView {
    pub id: i32,
    pub user_id: i32,
    pub type_id: i32,
    pub address_id: i32,
    pub name: String,
    pub description: String,
    pub telephone: String,
    pub email: String,
    pub address: AddressView,
}

#[derive(Debug, Clone)]
pub(crate) struct ValidServiceProvider {
    pub user_id: i32,
    pub type_id: i32,
    pub name: String,
    pub description: String,
    pub telephone: String,
    pub email: String,
    pub address: ValidAddress,
}

impl ServiceProviderInput {
    /// Provider scalars first, then the address fields.
    pub(crate) fn validate(self) -> Result<ValidServiceProvider, ServiceError> {
        let user_id = validation::id("user_id", self.user_id)?;
        let type_id = validation::id("type_id", self.type_id)?;
        let name = validation::text("name", self.name)?;
        let description = validation::text("description", self.description)?;
        let telephone = validation::text("telephone", self.telephone)?;
        let email = validation::text("email", self.email)?;
        let address = self.address.ok_or_else(|| ServiceError::mandatory("address"))?.validate()?;
        Ok(ValidServiceProvider { user_id, type_id, name, description, telephone, email, address })
    }
}

impl ServiceProviderView {
    /// Reshape a provider row and its address row into the nested view.
    pub fn compose(sp: service_provider::Model, addr: address::Model) -> Self {
        Self {
            id: sp.id,
            user_id: sp.user_id,
            type_id: sp.type_id,
            address_id: sp.address_id,
            name: sp.name,
            description: sp.description,
            telephone: sp.telephone,
            email: sp.email,
            address: addr.into(),
        }
    }
}

impl Sanitize for ServiceProviderView {
    fn sanitize(self) -> Self {
        Self {
            name: clean(&self.name),
            description: clean(&self.description),
            telephone: clean(&self.telephone),
            email: clean(&self.email),
            address: self.address.sanitize(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> AddressInput {
        AddressInput {
            street: Some("10 Downing St".into()),
            city: Some("London".into()),
            state: Some("LDN".into()),
            zipcode: Some("SW1A".into()),
        }
    }

    fn input() -> ServiceProviderInput {
        ServiceProviderInput {
            user_id: Some(1),
            type_id: Some(2),
            name: Some("Sparks Electric".into()),
            description: Some("Electrician".into()),
            telephone: Some("555-0199".into()),
            email: Some("sparks@example.com".into()),
            address: Some(address()),
        }
    }

    #[test]
    fn provider_fields_are_checked_before_address() {
        let bad_both = ServiceProviderInput {
            telephone: None,
            address: Some(AddressInput { city: None, ..address() }),
            ..input()
        };
        assert_eq!(bad_both.validate().unwrap_err().to_string(), "telephone is mandatory");

        let bad_address = ServiceProviderInput { address: Some(AddressInput { city: None, ..address() }), ..input() };
        assert_eq!(bad_address.validate().unwrap_err().to_string(), "city is mandatory");

        let no_address = ServiceProviderInput { address: None, ..input() };
        assert_eq!(no_address.validate().unwrap_err().to_string(), "address is mandatory");
    }

    #[test]
    fn ids_must_be_positive() {
        let err = ServiceProviderInput { type_id: Some(0), ..input() }.validate().unwrap_err();
        assert_eq!(err.status(), 400);
        assert!(input().validate().is_ok());
    }

    #[test]
    fn compose_nests_address_and_sanitizes_every_string() {
        let sp = service_provider::Model {
            id: 5,
            user_id: 1,
            type_id: 2,
            address_id: 9,
            name: "<script>alert('x')</script>Nunc Incorporated".into(),
            description: "desc<style>p{}</style>".into(),
            telephone: "555<script>1</script>".into(),
            email: "a@b.c".into(),
        };
        let addr = address::Model {
            id: 9,
            street: "<script>s</script>Main".into(),
            city: "City".into(),
            state: "ST".into(),
            zipcode: "00000".into(),
        };
        let view = ServiceProviderView::compose(sp, addr).sanitize();
        assert_eq!(view.address_id, view.address.id);
        assert_eq!(view.name, "Nunc Incorporated");
        assert_eq!(view.description, "desc");
        assert_eq!(view.telephone, "555");
        assert_eq!(view.address.street, "Main");
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["address"]["id"], 9);
    }
}
