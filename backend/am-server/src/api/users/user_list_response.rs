use am_core::Identity;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<Identity>,
}
