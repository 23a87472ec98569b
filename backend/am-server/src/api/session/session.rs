//! Session REST API handlers
//!
//! Login, logout and self-service signup. Login failures never say which
//! field was wrong.

use crate::{
    ApiError, ApiResult, AppState, LoginRequest, SessionResponse, SignupResponse,
};

use am_core::SignupForm;
use am_session::LOGIN_FAILED_MESSAGE;

use axum::{Json, extract::State, http::StatusCode};
use log::{debug, info};

pub const SIGNUP_FAILED_MESSAGE: &str = "Failed to create account. Email may already be in use.";
pub const SIGNUP_SUCCESS_MESSAGE: &str = "Account created. Please sign in.";

/// GET /api/v1/session
pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(SessionResponse::from(state.session.current().await))
}

/// POST /api/v1/session/login
///
/// On success the user's own assets are mounted for the "my assets" view.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<SessionResponse>> {
    state.unmount_my_assets().await;

    if !state.session.login(&req.email, &req.password).await {
        if let Some(reason) = state.session.last_login_error().await {
            debug!("Login for {} failed: {reason}", req.email);
        }
        return Err(ApiError::unauthorized(LOGIN_FAILED_MESSAGE));
    }

    let identity = state.session.current().await;
    if let Some(ref identity) = identity {
        state.mount_my_assets(identity.id).await;
    }

    Ok(Json(SessionResponse::from(identity)))
}

/// POST /api/v1/session/logout
pub async fn logout(State(state): State<AppState>) -> Json<SessionResponse> {
    state.unmount_my_assets().await;
    state.session.logout().await;

    Json(SessionResponse::anonymous())
}

/// POST /api/v1/session/signup
///
/// Password confirmation and length are checked before the store is called.
pub async fn signup(
    State(state): State<AppState>,
    Json(form): Json<SignupForm>,
) -> ApiResult<(StatusCode, Json<SignupResponse>)> {
    form.validate()?;

    let email = form.email.trim();
    if !state
        .session
        .signup(form.full_name.trim(), email, &form.password)
        .await
    {
        return Err(ApiError::conflict(SIGNUP_FAILED_MESSAGE));
    }

    info!("New account {email}");
    state.bus.trigger_refresh();

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            email: email.to_string(),
            message: SIGNUP_SUCCESS_MESSAGE.to_string(),
        }),
    ))
}
