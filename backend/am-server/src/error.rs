use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {source} {location}")]
    Config {
        #[source]
        source: am_config::ConfigError,
        location: ErrorLocation,
    },

    #[error("Store error: {source} {location}")]
    Store {
        #[source]
        source: am_store::StoreError,
        location: ErrorLocation,
    },

    #[error("Session state error: {source} {location}")]
    Session {
        #[source]
        source: am_session::SessionError,
        location: ErrorLocation,
    },

    #[error("Warranty client error: {source} {location}")]
    Warranty {
        #[source]
        source: am_warranty::WarrantyError,
        location: ErrorLocation,
    },

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl From<am_config::ConfigError> for ServerError {
    #[track_caller]
    fn from(source: am_config::ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<am_store::StoreError> for ServerError {
    #[track_caller]
    fn from(source: am_store::StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<am_session::SessionError> for ServerError {
    #[track_caller]
    fn from(source: am_session::SessionError) -> Self {
        Self::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<am_warranty::WarrantyError> for ServerError {
    #[track_caller]
    fn from(source: am_warranty::WarrantyError) -> Self {
        Self::Warranty {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
