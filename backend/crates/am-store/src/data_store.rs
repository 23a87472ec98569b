use crate::{Query, StoreErrorResult};

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use uuid::Uuid;

/// Generic table-scoped remote store.
///
/// Rows travel as JSON objects. Implementations assign `id` and `created_at`
/// on insert.
#[async_trait]
pub trait DataStore: Send + Sync {
    async fn select(&self, table: &str, query: &Query) -> StoreErrorResult<Vec<Value>>;

    /// Insert one row and return it as stored
    async fn insert(&self, table: &str, row: Value) -> StoreErrorResult<Value>;

    /// Merge `changes` into the row with `id` and return the updated row
    async fn update(&self, table: &str, id: Uuid, changes: Value) -> StoreErrorResult<Value>;

    async fn delete(&self, table: &str, id: Uuid) -> StoreErrorResult<()>;

    /// Store an object, replacing any existing object at the same path
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> StoreErrorResult<()>;

    fn public_url(&self, bucket: &str, path: &str) -> String;
}

pub type SharedStore = Arc<dyn DataStore>;
