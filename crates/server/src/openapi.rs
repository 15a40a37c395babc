use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorBodyDoc { pub message: String, pub status: u16 }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: ErrorBodyDoc }

#[derive(ToSchema)]
pub struct CredentialsRequest { pub username: String, pub password: String }

#[derive(ToSchema, serde::Deserialize)]
pub struct ChangePasswordRequest {
    pub username: String,
    pub password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

#[derive(ToSchema)]
pub struct UserDoc { pub id: i32, pub username: String }

#[derive(ToSchema)]
pub struct SessionDoc { pub id: i32, pub username: String, pub token: Option<String> }

#[derive(ToSchema)]
pub struct OwnerRequest { pub user_id: i32 }

#[derive(ToSchema)]
pub struct TypeRequest { pub name: String, pub description: String }

#[derive(ToSchema)]
pub struct TypeDoc { pub id: i32, pub name: String, pub description: String }

#[derive(ToSchema)]
pub struct AddressRequest { pub street: String, pub city: String, pub state: String, pub zipcode: String }

#[derive(ToSchema)]
pub struct AddressDoc { pub id: i32, pub street: String, pub city: String, pub state: String, pub zipcode: String }

#[derive(ToSchema)]
pub struct ExpenseRequest {
    pub user_id: i32,
    pub type_id: i32,
    /// Decimal with two places; zero allowed
    #[schema(example = "42.50")]
    pub amount: String,
    pub name: String,
    pub description: String,
    /// `YYYY-MM-DD` or `MM/DD/YYYY`
    pub date: String,
}

#[derive(ToSchema)]
pub struct ExpenseDoc {
    pub id: i32,
    pub user_id: i32,
    pub type_id: i32,
    pub amount: String,
    pub name: String,
    pub description: String,
    pub date: String,
}

#[derive(ToSchema)]
pub struct ServiceProviderRequest {
    pub user_id: i32,
    pub type_id: i32,
    pub name: String,
    pub description: String,
    pub telephone: String,
    pub email: String,
    pub address: AddressRequest,
}

#[derive(ToSchema)]
pub struct ServiceProviderDoc {
    pub id: i32,
    pub user_id: i32,
    pub type_id: i32,
    pub address_id: i32,
    pub name: String,
    pub description: String,
    pub telephone: String,
    pub email: String,
    pub address: AddressDoc,
}

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::home,
        crate::routes::health,
        crate::routes::users::register,
        crate::routes::users::authenticate,
        crate::routes::users::change_password,
        crate::routes::users::delete_user,
        crate::routes::expenses::create,
        crate::routes::expenses::list_by_user,
        crate::routes::expenses::get_one,
        crate::routes::expenses::update,
        crate::routes::expenses::delete,
        crate::routes::types::create,
        crate::routes::types::list,
        crate::routes::types::get_one,
        crate::routes::types::update,
        crate::routes::types::delete,
        crate::routes::addresses::create,
        crate::routes::addresses::get_one,
        crate::routes::addresses::update,
        crate::routes::addresses::delete,
        crate::routes::service_providers::create,
        crate::routes::service_providers::get_one,
        crate::routes::service_providers::list_by_user,
        crate::routes::service_providers::update,
        crate::routes::service_providers::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBodyDoc,
            ErrorDoc,
            CredentialsRequest,
            ChangePasswordRequest,
            UserDoc,
            SessionDoc,
            OwnerRequest,
            TypeRequest,
            TypeDoc,
            AddressRequest,
            AddressDoc,
            ExpenseRequest,
            ExpenseDoc,
            ServiceProviderRequest,
            ServiceProviderDoc,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "expenses"),
        (name = "types"),
        (name = "addresses"),
        (name = "serviceproviders")
    )
)]
pub struct ApiDoc;
