//! Asset rows and their client-side join with categories, departments and
//! creators.

use crate::repositories::{from_row, from_rows, to_row};
use crate::{
    ASSETS_TABLE, CategoryRepository, DepartmentRepository, Query, SharedStore, StoreErrorResult,
    UserRepository,
};

use am_core::{Asset, AssetDraft, NewAsset};

use std::collections::HashMap;

use bytes::Bytes;
use serde_json::json;
use uuid::Uuid;

pub struct AssetRepository {
    store: SharedStore,
}

impl AssetRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Assets newest first, optionally only those created by one user
    pub async fn list(&self, created_by: Option<Uuid>) -> StoreErrorResult<Vec<Asset>> {
        let mut query = Query::newest_first();
        if let Some(user_id) = created_by {
            query = query.eq("created_by", user_id.to_string());
        }

        let rows = self.store.select(ASSETS_TABLE, &query).await?;
        let assets = from_rows(rows)?;
        self.hydrate(assets).await
    }

    pub async fn find(&self, id: Uuid) -> StoreErrorResult<Option<Asset>> {
        let query = Query::new().eq("id", id.to_string()).limit(1);
        let rows = self.store.select(ASSETS_TABLE, &query).await?;
        let assets = self.hydrate(from_rows(rows)?).await?;
        Ok(assets.into_iter().next())
    }

    pub async fn create(&self, asset: &NewAsset) -> StoreErrorResult<Asset> {
        let row = self.store.insert(ASSETS_TABLE, to_row(asset)?).await?;
        from_row(row)
    }

    pub async fn update(&self, id: Uuid, draft: &AssetDraft) -> StoreErrorResult<Asset> {
        let row = self.store.update(ASSETS_TABLE, id, to_row(draft)?).await?;
        from_row(row)
    }

    pub async fn delete(&self, id: Uuid) -> StoreErrorResult<()> {
        self.store.delete(ASSETS_TABLE, id).await
    }

    /// Upload an image to `{bucket}/{asset_id}/{file_name}` and point the
    /// asset's `image_url` at its public URL
    pub async fn attach_image(
        &self,
        bucket: &str,
        id: Uuid,
        file_name: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> StoreErrorResult<Asset> {
        let path = format!("{id}/{file_name}");
        self.store.upload(bucket, &path, bytes, content_type).await?;

        let url = self.store.public_url(bucket, &path);
        let row = self
            .store
            .update(ASSETS_TABLE, id, json!({ "image_url": url }))
            .await?;
        from_row(row)
    }

    /// Fill `category`, `department` and `creator`. Dangling ids stay `None`.
    pub async fn hydrate(&self, mut assets: Vec<Asset>) -> StoreErrorResult<Vec<Asset>> {
        if assets.is_empty() {
            return Ok(assets);
        }

        let categories: HashMap<_, _> = CategoryRepository::new(self.store.clone())
            .list()
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();
        let departments: HashMap<_, _> = DepartmentRepository::new(self.store.clone())
            .list()
            .await?
            .into_iter()
            .map(|d| (d.id, d))
            .collect();
        let users: HashMap<_, _> = UserRepository::new(self.store.clone())
            .list()
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        for asset in &mut assets {
            asset.category = asset.category_id.and_then(|id| categories.get(&id).cloned());
            asset.department = asset
                .department_id
                .and_then(|id| departments.get(&id).cloned());
            asset.creator = asset.created_by.and_then(|id| users.get(&id).cloned());
        }

        Ok(assets)
    }
}
