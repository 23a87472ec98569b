//! Categories and departments.
//!
//! Both are flat lookup tables with the same shape. Deleting an entry does not
//! cascade: assets keep the dangling id and simply hydrate to `None`.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Common behavior of lookup-table rows
pub trait CatalogEntry: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Remote table name
    const TABLE: &'static str;
    /// Singular label used in messages
    const LABEL: &'static str;

    fn id(&self) -> Uuid;
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CatalogEntry for Category {
    const TABLE: &'static str = "asset_categories";
    const LABEL: &'static str = "Category";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl CatalogEntry for Department {
    const TABLE: &'static str = "departments";
    const LABEL: &'static str = "Department";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Row written for both insert and update of a lookup entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRow {
    pub name: String,
    pub description: Option<String>,
}
