use am_core::Identity;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: Identity,
}
