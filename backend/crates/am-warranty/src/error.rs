use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarrantyError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Warranty API error ({status}): {message} {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Not authenticated. Please login first. {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Session expired. Please login again. {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Login response did not contain an access token {location}")]
    MissingAccessToken { location: ErrorLocation },

    #[error("{message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Wizard is not on the {expected} step {location}")]
    InvalidStep {
        expected: &'static str,
        location: ErrorLocation,
    },
}

impl WarrantyError {
    #[track_caller]
    pub fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn token_expired() -> Self {
        Self::TokenExpired {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message suitable for showing to the user
    pub fn message(&self) -> String {
        match self {
            Self::Http { .. } => String::from("Failed to connect to warranty API"),
            Self::Api { message, .. } | Self::Rejected { message, .. } => message.clone(),
            Self::Json { message, .. } => message.clone(),
            Self::NotAuthenticated { .. } => String::from("Not authenticated. Please login first."),
            Self::TokenExpired { .. } => String::from("Session expired. Please login again."),
            Self::MissingAccessToken { .. } => {
                String::from("Login response did not contain an access token")
            }
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidStep { expected, .. } => format!("Wizard is not on the {expected} step"),
        }
    }
}

impl From<reqwest::Error> for WarrantyError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<serde_json::Error> for WarrantyError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, WarrantyError>;
