use am_core::ActivityLog;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ActivityListResponse {
    pub entries: Vec<ActivityLog>,
}
