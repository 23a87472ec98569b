//! User management REST API handlers (admin only)

use crate::{
    AdminIdentity, ApiError, ApiResult, AppState, DeleteResponse, UserListResponse, UserResponse,
};

use am_core::UserForm;
use am_store::UserRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use log::info;
use uuid::Uuid;

pub const EMAIL_IN_USE_MESSAGE: &str = "A user with this email already exists";

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    AdminIdentity(_): AdminIdentity,
) -> ApiResult<Json<UserListResponse>> {
    let users = state.read(&state.resources.users).await?;

    Ok(Json(UserListResponse { users }))
}

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    AdminIdentity(admin): AdminIdentity,
    Json(form): Json<UserForm>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let new_user = form.validate_create()?;

    let user = UserRepository::new(state.store.clone())
        .create(&new_user)
        .await
        .map_err(email_conflict)?;
    info!("{} created user {}", admin.email, user.email);
    state.bus.trigger_refresh();

    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

/// PUT /api/v1/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    AdminIdentity(admin): AdminIdentity,
    Path(id): Path<String>,
    Json(form): Json<UserForm>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = Uuid::parse_str(&id)?;
    let changes = form.validate_update()?;

    let user = UserRepository::new(state.store.clone())
        .update(user_id, &changes)
        .await
        .map_err(email_conflict)?;
    info!("{} updated user {}", admin.email, user.email);
    state.bus.trigger_refresh();

    Ok(Json(UserResponse { user }))
}

/// POST /api/v1/users/{id}/toggle-active
pub async fn toggle_user_active(
    State(state): State<AppState>,
    AdminIdentity(admin): AdminIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = Uuid::parse_str(&id)?;
    if user_id == admin.id {
        return Err(ApiError::bad_request("You cannot deactivate your own account"));
    }

    let users = state.read(&state.resources.users).await?;
    let current = users
        .iter()
        .find(|u| u.id == user_id)
        .ok_or_else(|| ApiError::not_found(format!("User {id} not found")))?;

    let user = UserRepository::new(state.store.clone())
        .set_active(user_id, !current.is_active)
        .await?;
    info!(
        "{} set {} active={}",
        admin.email, user.email, user.is_active
    );
    state.bus.trigger_refresh();

    Ok(Json(UserResponse { user }))
}

/// DELETE /api/v1/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    AdminIdentity(admin): AdminIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let user_id = Uuid::parse_str(&id)?;
    if user_id == admin.id {
        return Err(ApiError::bad_request("You cannot delete your own account"));
    }

    UserRepository::new(state.store.clone())
        .delete(user_id)
        .await?;
    info!("{} deleted user {user_id}", admin.email);
    state.bus.trigger_refresh();

    Ok(Json(DeleteResponse::new(user_id)))
}

fn email_conflict(e: am_store::StoreError) -> ApiError {
    if e.is_unique_violation() {
        ApiError::conflict(EMAIL_IN_USE_MESSAGE)
    } else {
        ApiError::from(e)
    }
}
