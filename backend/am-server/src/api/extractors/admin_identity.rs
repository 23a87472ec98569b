use crate::{ApiError, AppState, CurrentIdentity};

use am_core::Identity;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

pub const ADMIN_REQUIRED_MESSAGE: &str = "Administrator access required";

/// The current identity, which must have the admin role
///
/// Enforcement is local to this process; the remote store does not check roles.
pub struct AdminIdentity(pub Identity);

impl FromRequestParts<AppState> for AdminIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let CurrentIdentity(identity) = CurrentIdentity::from_request_parts(parts, state).await?;

            if !identity.is_admin() {
                log::debug!("{} denied admin access", identity.email);
                return Err(ApiError::forbidden(ADMIN_REQUIRED_MESSAGE));
            }

            Ok(AdminIdentity(identity))
        }
    }
}
