use crate::{ActivityListResponse, AdminIdentity, ApiResult, AppState};

use axum::{Json, extract::State};

/// GET /api/v1/activity (admin)
///
/// Newest entries first, up to `session.activity_log_limit`.
pub async fn list_activity(
    State(state): State<AppState>,
    AdminIdentity(_): AdminIdentity,
) -> ApiResult<Json<ActivityListResponse>> {
    let entries = state.read(&state.resources.activity).await?;

    Ok(Json(ActivityListResponse { entries }))
}
