use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body of `GET /`.
pub const WELCOME: &str = "Welcome to Home Manager API";
