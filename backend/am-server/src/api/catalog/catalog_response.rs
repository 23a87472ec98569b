use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CatalogResponse<T> {
    pub item: T,
}
