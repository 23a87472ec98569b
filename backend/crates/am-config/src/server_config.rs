use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_READ_TIMEOUT_SECS,
    MAX_READ_TIMEOUT_SECS, MIN_PORT, MIN_READ_TIMEOUT_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for a view waiting on its data hooks to settle
    pub read_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            read_timeout_secs: DEFAULT_READ_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 means "auto-assign"
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.read_timeout_secs < MIN_READ_TIMEOUT_SECS
            || self.read_timeout_secs > MAX_READ_TIMEOUT_SECS
        {
            return Err(ConfigError::server(format!(
                "server.read_timeout_secs must be {}-{}, got {}",
                MIN_READ_TIMEOUT_SECS, MAX_READ_TIMEOUT_SECS, self.read_timeout_secs
            )));
        }

        Ok(())
    }
}
