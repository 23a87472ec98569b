use crate::repositories::{from_row, from_rows, to_row};
use crate::{Query, SharedStore, StoreErrorResult};

use am_core::{CatalogEntry, CatalogRow, Category, Department};

use std::marker::PhantomData;

use uuid::Uuid;

/// CRUD over one lookup table (categories or departments)
pub struct CatalogRepository<T: CatalogEntry> {
    store: SharedStore,
    _entry: PhantomData<T>,
}

pub type CategoryRepository = CatalogRepository<Category>;
pub type DepartmentRepository = CatalogRepository<Department>;

impl<T: CatalogEntry> CatalogRepository<T> {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            _entry: PhantomData,
        }
    }

    /// All entries, newest first
    pub async fn list(&self) -> StoreErrorResult<Vec<T>> {
        let rows = self.store.select(T::TABLE, &Query::newest_first()).await?;
        from_rows(rows)
    }

    pub async fn find_by_name(&self, name: &str) -> StoreErrorResult<Option<T>> {
        let query = Query::new().eq("name", name).limit(1);
        let rows = self.store.select(T::TABLE, &query).await?;
        Ok(from_rows(rows)?.into_iter().next())
    }

    pub async fn create(&self, entry: &CatalogRow) -> StoreErrorResult<T> {
        let row = self.store.insert(T::TABLE, to_row(entry)?).await?;
        from_row(row)
    }

    pub async fn update(&self, id: Uuid, entry: &CatalogRow) -> StoreErrorResult<T> {
        let row = self.store.update(T::TABLE, id, to_row(entry)?).await?;
        from_row(row)
    }

    /// Assets referencing the entry keep the dangling id
    pub async fn delete(&self, id: Uuid) -> StoreErrorResult<()> {
        self.store.delete(T::TABLE, id).await
    }
}
