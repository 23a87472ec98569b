mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod session_config;
mod store_config;
mod warranty_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;
pub use store_config::{StoreBackend, StoreConfig};
pub use warranty_config::WarrantyConfig;

pub const CONFIG_DIR_ENV: &str = "AM_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".am";
pub const CONFIG_FILENAME: &str = "config.toml";

// Server
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const MIN_PORT: u16 = 1024;
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 5;
pub const MIN_READ_TIMEOUT_SECS: u64 = 1;
pub const MAX_READ_TIMEOUT_SECS: u64 = 60;

// Store
pub const DEFAULT_IMAGE_BUCKET: &str = "asset-images";
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 30;
pub const MIN_STORE_TIMEOUT_SECS: u64 = 1;
pub const MAX_STORE_TIMEOUT_SECS: u64 = 300;

// Warranty
pub const DEFAULT_WARRANTY_BASE_URL: &str = "http://127.0.0.1:8000/api/warranty";
pub const DEFAULT_WARRANTY_TIMEOUT_SECS: u64 = 30;

// Session
pub const DEFAULT_STATE_FILE: &str = "state.json";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@eport.cloud";
pub const DEFAULT_ACTIVITY_LOG_LIMIT: usize = 10;
pub const MIN_ACTIVITY_LOG_LIMIT: usize = 1;
pub const MAX_ACTIVITY_LOG_LIMIT: usize = 100;

// Logging
pub const DEFAULT_LOG_LEVEL_STRING: &str = "info";
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
pub const DEFAULT_LOG_DIRECTORY: &str = "log";
pub const DEFAULT_LOG_COLORED: bool = true;
