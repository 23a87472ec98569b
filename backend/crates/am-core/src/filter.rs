use crate::Asset;

use serde::Deserialize;
use uuid::Uuid;

/// Client-side narrowing of an already fetched asset list
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetFilter {
    /// Case-insensitive substring match on the asset name
    pub search: Option<String>,
    pub category_id: Option<Uuid>,
}

impl AssetFilter {
    pub fn matches(&self, asset: &Asset) -> bool {
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty())
            && !asset.name.to_lowercase().contains(&search.to_lowercase())
        {
            return false;
        }

        if let Some(category_id) = self.category_id
            && asset.category_id != Some(category_id)
        {
            return false;
        }

        true
    }

    pub fn apply(&self, assets: &[Asset]) -> Vec<Asset> {
        assets.iter().filter(|a| self.matches(a)).cloned().collect()
    }
}
