//! Asset entity - a recorded organizational asset.

use crate::{Category, Department, Identity};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Icon shown when an asset has no explicit icon tag
pub const DEFAULT_ICON_NAME: &str = "Package";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: Uuid,
    pub name: String,
    pub category_id: Option<Uuid>,
    pub department_id: Option<Uuid>,
    pub date_purchased: NaiveDate,
    pub cost: f64,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub icon_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,

    // Hydrated relations, never written back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<Identity>,
}

impl Asset {
    pub fn icon(&self) -> &str {
        self.icon_name.as_deref().unwrap_or(DEFAULT_ICON_NAME)
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    pub fn department_name(&self) -> Option<&str> {
        self.department.as_ref().map(|d| d.name.as_str())
    }

    /// Whether `identity` may edit this asset
    pub fn editable_by(&self, identity: &Identity) -> bool {
        identity.is_admin() || self.created_by == Some(identity.id)
    }
}

/// Validated asset fields, shared by create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetDraft {
    pub name: String,
    pub category_id: Option<Uuid>,
    pub department_id: Option<Uuid>,
    pub date_purchased: NaiveDate,
    pub cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
}

/// Row inserted into `assets`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAsset {
    #[serde(flatten)]
    pub draft: AssetDraft,
    pub created_by: Option<Uuid>,
}
