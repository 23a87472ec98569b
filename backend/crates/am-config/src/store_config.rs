use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_IMAGE_BUCKET, DEFAULT_STORE_TIMEOUT_SECS,
    MAX_STORE_TIMEOUT_SECS, MIN_STORE_TIMEOUT_SECS,
};

use std::str::FromStr;

use serde::Deserialize;

/// Which data store implementation backs the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// Hosted relational backend over HTTP
    Rest,
    /// In-process tables, lost on restart
    #[default]
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::Memory => "memory",
        }
    }
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s.to_lowercase().as_str() {
            "rest" => Ok(Self::Rest),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::store(format!(
                "store.backend must be 'rest' or 'memory', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Base URL of the hosted backend, e.g. `https://project.example.co`
    pub url: Option<String>,
    /// Anonymous API key sent with every request
    pub api_key: Option<String>,
    /// Object-storage bucket for asset images
    pub image_bucket: String,
    pub timeout_secs: u64,
    /// Insert the sample categories, departments, users and assets on startup
    pub seed_sample_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            url: None,
            api_key: None,
            image_bucket: String::from(DEFAULT_IMAGE_BUCKET),
            timeout_secs: DEFAULT_STORE_TIMEOUT_SECS,
            seed_sample_data: false,
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.backend == StoreBackend::Rest {
            let url = self
                .url
                .as_deref()
                .filter(|u| !u.trim().is_empty())
                .ok_or_else(|| ConfigError::store("store.url is required for the rest backend"))?;

            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::store(format!(
                    "store.url must start with http:// or https://, got '{url}'"
                )));
            }

            if self.api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
                return Err(ConfigError::store(
                    "store.api_key is required for the rest backend",
                ));
            }
        }

        if self.image_bucket.trim().is_empty() {
            return Err(ConfigError::store("store.image_bucket cannot be empty"));
        }

        if self.timeout_secs < MIN_STORE_TIMEOUT_SECS || self.timeout_secs > MAX_STORE_TIMEOUT_SECS
        {
            return Err(ConfigError::store(format!(
                "store.timeout_secs must be {}-{}, got {}",
                MIN_STORE_TIMEOUT_SECS, MAX_STORE_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
