use crate::{CatalogRow, CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// Category or department form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogForm {
    pub name: String,
    pub description: String,
}

impl CatalogForm {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<CatalogRow> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoreError::validation("name", "Name is required"));
        }

        let description = self.description.trim();
        Ok(CatalogRow {
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}
