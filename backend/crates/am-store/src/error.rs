use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Store API error ({status}): {message} (code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("{table} row not found: {id} {location}")]
    NotFound {
        table: String,
        id: Uuid,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn api<C: Into<String>, M: Into<String>>(status: u16, code: C, message: M) -> Self {
        StoreError::Api {
            status,
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(table: &str, id: Uuid) -> Self {
        StoreError::NotFound {
            table: table.to_string(),
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Human-readable message without the location suffix
    pub fn message(&self) -> String {
        match self {
            Self::Http { message, .. } => message.clone(),
            Self::Api { message, .. } => message.clone(),
            Self::Json { message, .. } => message.clone(),
            Self::NotFound { table, id, .. } => format!("{table} row not found: {id}"),
        }
    }

    /// Unique-constraint violation (Postgres code 23505)
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::Api { code, .. } if code == UNIQUE_VIOLATION_CODE)
    }
}

pub(crate) const UNIQUE_VIOLATION_CODE: &str = "23505";

impl From<reqwest::Error> for StoreError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        StoreError::Http {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        StoreError::Json {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
