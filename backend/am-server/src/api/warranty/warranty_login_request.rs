use serde::Deserialize;

/// Credentials for the warranty service, not for this application
#[derive(Debug, Deserialize)]
pub struct WarrantyLoginRequest {
    pub username: String,
    pub password: String,
}
