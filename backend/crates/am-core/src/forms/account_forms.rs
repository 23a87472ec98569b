//! Signup and admin user-management forms.

use crate::{CoreError, IdentityChanges, NewIdentity, Result as CoreErrorResult, Role};

use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.password != self.confirm_password {
            return Err(CoreError::validation(
                "confirm_password",
                "Passwords do not match",
            ));
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CoreError::validation(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
            ));
        }

        validate_email(&self.email)?;

        if self.full_name.trim().is_empty() {
            return Err(CoreError::validation("full_name", "Full name is required"));
        }

        Ok(())
    }
}

/// Admin form for creating or editing a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserForm {
    pub email: String,
    pub full_name: String,
    /// Only used on create
    pub password: String,
    pub role: Role,
    pub is_active: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            full_name: String::new(),
            password: String::new(),
            role: Role::User,
            is_active: true,
        }
    }
}

impl UserForm {
    #[track_caller]
    pub fn validate_create(&self) -> CoreErrorResult<NewIdentity> {
        self.validate_common()?;
        if self.password.is_empty() {
            return Err(CoreError::validation("password", "Password is required"));
        }

        Ok(NewIdentity {
            email: self.email.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
            is_active: self.is_active,
        })
    }

    #[track_caller]
    pub fn validate_update(&self) -> CoreErrorResult<IdentityChanges> {
        self.validate_common()?;

        Ok(IdentityChanges {
            email: Some(self.email.trim().to_string()),
            full_name: Some(self.full_name.trim().to_string()),
            role: Some(self.role),
            is_active: Some(self.is_active),
        })
    }

    #[track_caller]
    fn validate_common(&self) -> CoreErrorResult<()> {
        validate_email(&self.email)?;
        if self.full_name.trim().is_empty() {
            return Err(CoreError::validation("full_name", "Full name is required"));
        }
        Ok(())
    }
}

#[track_caller]
fn validate_email(email: &str) -> CoreErrorResult<()> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(CoreError::validation("email", "A valid email is required")),
    }
}
