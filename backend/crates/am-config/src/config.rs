use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    LoggingConfig, ServerConfig, SessionConfig, StoreBackend, StoreConfig, WarrantyConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub warranty: WarrantyConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for AM_CONFIG_DIR env var, else use ./.am/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply AM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AM_CONFIG_DIR env var > ./.am/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.store.validate()?;
        self.warranty.validate()?;
        self.session.validate()?;

        if let Some(file) = &self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::config(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path to the persisted client-state file.
    pub fn state_file_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.session.state_file))
    }

    /// Absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (read timeout {}s)",
            self.server.host, self.server.port, self.server.read_timeout_secs
        );

        match self.store.backend {
            StoreBackend::Rest => info!(
                "  store: rest {} (api key: {}, bucket: {}, timeout {}s)",
                self.store.url.as_deref().unwrap_or("<unset>"),
                if self.store.api_key.is_some() {
                    "set"
                } else {
                    "missing"
                },
                self.store.image_bucket,
                self.store.timeout_secs
            ),
            StoreBackend::Memory => info!(
                "  store: memory (seed sample data: {})",
                self.store.seed_sample_data
            ),
        }

        info!(
            "  warranty: {} (timeout {}s)",
            self.warranty.base_url, self.warranty.timeout_secs
        );
        info!(
            "  session: state={}, activity feed={}",
            self.session.state_file, self.session.activity_log_limit
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("AM_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("AM_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "AM_SERVER_READ_TIMEOUT_SECS",
            &mut self.server.read_timeout_secs,
        );

        // Store
        Self::apply_env_parse("AM_STORE_BACKEND", &mut self.store.backend);
        Self::apply_env_option_string("AM_STORE_URL", &mut self.store.url);
        Self::apply_env_option_string("AM_STORE_API_KEY", &mut self.store.api_key);
        Self::apply_env_string("AM_STORE_IMAGE_BUCKET", &mut self.store.image_bucket);
        Self::apply_env_parse("AM_STORE_TIMEOUT_SECS", &mut self.store.timeout_secs);
        Self::apply_env_bool("AM_STORE_SEED_SAMPLE_DATA", &mut self.store.seed_sample_data);

        // Warranty
        Self::apply_env_string("AM_WARRANTY_BASE_URL", &mut self.warranty.base_url);
        Self::apply_env_parse("AM_WARRANTY_TIMEOUT_SECS", &mut self.warranty.timeout_secs);

        // Session
        Self::apply_env_string("AM_SESSION_STATE_FILE", &mut self.session.state_file);
        Self::apply_env_string("AM_SESSION_ADMIN_EMAIL", &mut self.session.admin_email);
        Self::apply_env_parse(
            "AM_SESSION_ACTIVITY_LOG_LIMIT",
            &mut self.session.activity_log_limit,
        );

        // Logging
        Self::apply_env_parse("AM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("AM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("AM_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("AM_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
