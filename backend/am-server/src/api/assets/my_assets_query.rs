use am_core::AssetFilter;

use serde::Deserialize;
use uuid::Uuid;

/// Query string of the "my assets" view
///
/// Browsers send `category_id=` for "all categories", so the id arrives as
/// text and an empty value means no filter.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MyAssetsQuery {
    pub search: Option<String>,
    pub category_id: Option<String>,
}

impl MyAssetsQuery {
    pub fn to_filter(&self) -> Result<AssetFilter, uuid::Error> {
        let category_id = match self.category_id.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(Uuid::parse_str(raw)?),
            _ => None,
        };

        Ok(AssetFilter {
            search: self.search.clone(),
            category_id,
        })
    }
}
