use std::sync::Arc;

use sea_orm::DatabaseConnection;

use service::auth::repo::seaorm::SeaOrmAuthRepository;
use service::auth::service::{AuthConfig, AuthService};
use service::service_provider::ServiceProviderService;

/// Shared handler state: the pool plus services built on it.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub api_key: Arc<str>,
    pub auth: Arc<AuthService<SeaOrmAuthRepository>>,
    pub providers: ServiceProviderService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, cfg: &configs::AuthConfig) -> Self {
        let auth_cfg = AuthConfig { jwt_secret: cfg.jwt_secret.clone(), token_ttl_hours: cfg.token_ttl_hours };
        let repo = Arc::new(SeaOrmAuthRepository::new(db.clone()));
        Self {
            api_key: Arc::from(cfg.api_key.as_str()),
            auth: Arc::new(AuthService::new(repo, auth_cfg)),
            providers: ServiceProviderService::new(db.clone()),
            db,
        }
    }
}
