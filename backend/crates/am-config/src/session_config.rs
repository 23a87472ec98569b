use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACTIVITY_LOG_LIMIT, DEFAULT_ADMIN_EMAIL,
    DEFAULT_STATE_FILE, MAX_ACTIVITY_LOG_LIMIT, MIN_ACTIVITY_LOG_LIMIT,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// File (relative to the config dir) holding persisted client state
    pub state_file: String,
    /// Logging in with this email always yields the admin role
    pub admin_email: String,
    /// Number of entries the activity feed loads
    pub activity_log_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            state_file: String::from(DEFAULT_STATE_FILE),
            admin_email: String::from(DEFAULT_ADMIN_EMAIL),
            activity_log_limit: DEFAULT_ACTIVITY_LOG_LIMIT,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = std::path::Path::new(&self.state_file);
        if self.state_file.trim().is_empty() || path.is_absolute() || self.state_file.contains("..")
        {
            return Err(ConfigError::session(
                "session.state_file must be relative and cannot contain '..'",
            ));
        }

        if !self.admin_email.contains('@') {
            return Err(ConfigError::session(format!(
                "session.admin_email must be an email address, got '{}'",
                self.admin_email
            )));
        }

        if self.activity_log_limit < MIN_ACTIVITY_LOG_LIMIT
            || self.activity_log_limit > MAX_ACTIVITY_LOG_LIMIT
        {
            return Err(ConfigError::session(format!(
                "session.activity_log_limit must be {}-{}, got {}",
                MIN_ACTIVITY_LOG_LIMIT, MAX_ACTIVITY_LOG_LIMIT, self.activity_log_limit
            )));
        }

        Ok(())
    }
}
