use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_WARRANTY_BASE_URL, DEFAULT_WARRANTY_TIMEOUT_SECS,
    MAX_STORE_TIMEOUT_SECS, MIN_STORE_TIMEOUT_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WarrantyConfig {
    /// Base URL of the warranty API, without trailing slash
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for WarrantyConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_WARRANTY_BASE_URL),
            timeout_secs: DEFAULT_WARRANTY_TIMEOUT_SECS,
        }
    }
}

impl WarrantyConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::warranty(format!(
                "warranty.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_STORE_TIMEOUT_SECS || self.timeout_secs > MAX_STORE_TIMEOUT_SECS
        {
            return Err(ConfigError::warranty(format!(
                "warranty.timeout_secs must be {}-{}, got {}",
                MIN_STORE_TIMEOUT_SECS, MAX_STORE_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
