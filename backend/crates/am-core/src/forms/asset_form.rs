use crate::{AssetDraft, CoreError, Result as CoreErrorResult};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cost as submitted: browsers send either a JSON number or the raw input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CostInput {
    Number(f64),
    Text(String),
}

impl Default for CostInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// Asset form state, field for field as the user typed it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetForm {
    pub name: String,
    /// Empty string means "no category"
    pub category_id: String,
    /// Empty string means "no department"
    pub department_id: String,
    /// `YYYY-MM-DD`
    pub date_purchased: String,
    pub cost: CostInput,
    pub icon_name: Option<String>,
}

impl AssetForm {
    /// Prefill the form from an existing asset for editing
    pub fn from_asset(asset: &crate::Asset) -> Self {
        Self {
            name: asset.name.clone(),
            category_id: asset.category_id.map(|id| id.to_string()).unwrap_or_default(),
            department_id: asset
                .department_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            date_purchased: asset.date_purchased.format("%Y-%m-%d").to_string(),
            cost: CostInput::Number(asset.cost),
            icon_name: asset.icon_name.clone(),
        }
    }

    /// Validate against `today`. Runs before any remote call.
    #[track_caller]
    pub fn validate(&self, today: NaiveDate) -> CoreErrorResult<AssetDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoreError::validation("name", "Asset name is required"));
        }

        let date_purchased = NaiveDate::parse_from_str(self.date_purchased.trim(), "%Y-%m-%d")
            .map_err(|_| {
                CoreError::validation("date_purchased", "Purchase date must be YYYY-MM-DD")
            })?;
        if date_purchased > today {
            return Err(CoreError::validation(
                "date_purchased",
                "Purchase date cannot be in the future",
            ));
        }

        let cost = match &self.cost {
            CostInput::Number(n) => *n,
            CostInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| CoreError::validation("cost", "Cost must be a number"))?,
        };
        if !cost.is_finite() || cost < 0.0 {
            return Err(CoreError::validation("cost", "Cost cannot be negative"));
        }

        Ok(AssetDraft {
            name: name.to_string(),
            category_id: parse_optional_id("category_id", &self.category_id)?,
            department_id: parse_optional_id("department_id", &self.department_id)?,
            date_purchased,
            cost,
            icon_name: self
                .icon_name
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
        })
    }
}

#[track_caller]
fn parse_optional_id(field: &str, raw: &str) -> CoreErrorResult<Option<Uuid>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    Uuid::parse_str(raw)
        .map(Some)
        .map_err(|_| CoreError::validation(field, format!("Invalid id: {raw}")))
}
