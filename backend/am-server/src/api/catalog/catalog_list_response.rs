use serde::Serialize;

/// Categories or departments, newest first
#[derive(Debug, Serialize)]
pub struct CatalogListResponse<T> {
    pub items: Vec<T>,
}
