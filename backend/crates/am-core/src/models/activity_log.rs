use crate::Identity;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ACTION_CREATED_ASSET: &str = "Created asset";
pub const ENTITY_TYPE_ASSET: &str = "asset";

/// Append-only audit entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub action: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<Uuid>,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Identity>,
}

impl ActivityLog {
    /// Display name of the actor, "System" when unknown
    pub fn actor_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.full_name.as_str())
            .unwrap_or("System")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewActivityLog {
    pub user_id: Option<Uuid>,
    pub action: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<Uuid>,
    pub details: Option<String>,
}

impl NewActivityLog {
    pub fn asset_created(user_id: Option<Uuid>, asset_id: Option<Uuid>, name: &str) -> Self {
        Self {
            user_id,
            action: ACTION_CREATED_ASSET.to_string(),
            entity_type: Some(ENTITY_TYPE_ASSET.to_string()),
            entity_id: asset_id,
            details: Some(name.to_string()),
        }
    }
}
