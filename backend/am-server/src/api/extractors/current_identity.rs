//! Axum extractors for the logged-in identity

use crate::{ApiError, AppState};

use am_core::Identity;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

pub const NOT_LOGGED_IN_MESSAGE: &str = "Please sign in to continue";

/// The identity held by the session store
///
/// Rejects with 401 when nobody is logged in.
pub struct CurrentIdentity(pub Identity);

impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match state.session.current().await {
                Some(identity) => Ok(CurrentIdentity(identity)),
                None => Err(ApiError::unauthorized(NOT_LOGGED_IN_MESSAGE)),
            }
        }
    }
}
