use crate::{ApiResult, AppState, CurrentIdentity, DashboardResponse};

use am_core::{AdminStats, UserStats, format_currency};

use axum::{Json, extract::State};

/// Entries shown in the admin dashboard's activity panel
pub const DASHBOARD_ACTIVITY_COUNT: usize = 5;

/// GET /api/v1/dashboard
///
/// Admins get organization-wide totals and recent activity; everyone else
/// gets figures over their own assets.
pub async fn get_dashboard(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> ApiResult<Json<DashboardResponse>> {
    let resources = &state.resources;

    if identity.is_admin() {
        let users = state.read(&resources.users).await?;
        let assets = state.read(&resources.assets).await?;
        let categories = state.read(&resources.categories).await?;
        let departments = state.read(&resources.departments).await?;
        let mut recent_activity = state.read(&resources.activity).await?;
        recent_activity.truncate(DASHBOARD_ACTIVITY_COUNT);

        let stats = AdminStats::compute(&users, &assets, &categories, &departments);
        return Ok(Json(DashboardResponse::Admin {
            total_value_display: format_currency(stats.total_asset_value),
            stats,
            recent_activity,
        }));
    }

    let mine = state.mount_my_assets(identity.id).await;
    let assets = state.read(&mine).await?;
    let categories = state.read(&resources.categories).await?;

    let stats = UserStats::compute(&assets, &categories);
    Ok(Json(DashboardResponse::User {
        total_value_display: format_currency(stats.total_value),
        stats,
    }))
}
