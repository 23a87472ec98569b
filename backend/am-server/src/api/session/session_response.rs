use am_core::Identity;

use serde::Serialize;

/// Who is logged in, if anyone
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: Option<Identity>,
    pub is_admin: bool,
}

impl SessionResponse {
    pub fn anonymous() -> Self {
        Self {
            user: None,
            is_admin: false,
        }
    }
}

impl From<Option<Identity>> for SessionResponse {
    fn from(user: Option<Identity>) -> Self {
        Self {
            is_admin: user.as_ref().is_some_and(Identity::is_admin),
            user,
        }
    }
}
