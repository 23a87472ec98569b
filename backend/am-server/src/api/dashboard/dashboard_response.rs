use am_core::{ActivityLog, AdminStats, UserStats};

use serde::Serialize;

/// Dashboard variant selected by the caller's role
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DashboardResponse {
    Admin {
        stats: AdminStats,
        total_value_display: String,
        recent_activity: Vec<ActivityLog>,
    },
    User {
        stats: UserStats,
        total_value_display: String,
    },
}
