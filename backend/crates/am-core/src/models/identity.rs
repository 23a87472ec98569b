//! Identity entity - an authenticated user record.
//!
//! Rows in `app_users` also carry a plaintext `password` column. It is only
//! ever written through [`NewIdentity`] and never deserialized into
//! [`Identity`].

use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    #[serde(default, deserialize_with = "Role::deserialize_nullable")]
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Copy of this identity with the role forced to admin
    pub fn promoted(mut self) -> Self {
        self.role = Role::Admin;
        self
    }
}

/// Row inserted into `app_users`
#[derive(Debug, Clone, Serialize)]
pub struct NewIdentity {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub role: Role,
    pub is_active: bool,
}

impl NewIdentity {
    /// Self-service signup always creates an active, non-admin account
    pub fn signup(full_name: String, email: String, password: String) -> Self {
        Self {
            email,
            full_name,
            password,
            role: Role::User,
            is_active: true,
        }
    }
}

/// Partial update of an `app_users` row. The password is not editable.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IdentityChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
