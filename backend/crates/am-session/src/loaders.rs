use crate::EntityLoader;

use am_core::{ActivityLog, Asset, CatalogEntry, Category, Department, Identity};
use am_store::{
    ActivityLogRepository, AssetRepository, CatalogRepository, SharedStore, StoreErrorResult,
    UserRepository,
};

use async_trait::async_trait;
use uuid::Uuid;

pub const DEFAULT_ACTIVITY_LIMIT: usize = 10;

/// All users, newest first
pub struct UsersLoader {
    users: UserRepository,
}

impl UsersLoader {
    pub fn new(store: SharedStore) -> Self {
        Self {
            users: UserRepository::new(store),
        }
    }
}

#[async_trait]
impl EntityLoader for UsersLoader {
    type Item = Identity;

    fn name(&self) -> &'static str {
        "users"
    }

    async fn load(&self) -> StoreErrorResult<Vec<Identity>> {
        self.users.list().await
    }
}

/// Hydrated assets, newest first, optionally only one creator's
pub struct AssetsLoader {
    assets: AssetRepository,
    created_by: Option<Uuid>,
}

impl AssetsLoader {
    pub fn new(store: SharedStore, created_by: Option<Uuid>) -> Self {
        Self {
            assets: AssetRepository::new(store),
            created_by,
        }
    }
}

#[async_trait]
impl EntityLoader for AssetsLoader {
    type Item = Asset;

    fn name(&self) -> &'static str {
        if self.created_by.is_some() {
            "my assets"
        } else {
            "assets"
        }
    }

    async fn load(&self) -> StoreErrorResult<Vec<Asset>> {
        self.assets.list(self.created_by).await
    }
}

/// Every entry of one lookup table, newest first
pub struct CatalogLoader<T: CatalogEntry> {
    entries: CatalogRepository<T>,
}

pub type CategoriesLoader = CatalogLoader<Category>;
pub type DepartmentsLoader = CatalogLoader<Department>;

impl<T: CatalogEntry> CatalogLoader<T> {
    pub fn new(store: SharedStore) -> Self {
        Self {
            entries: CatalogRepository::new(store),
        }
    }
}

#[async_trait]
impl<T: CatalogEntry> EntityLoader for CatalogLoader<T> {
    type Item = T;

    fn name(&self) -> &'static str {
        T::TABLE
    }

    async fn load(&self) -> StoreErrorResult<Vec<T>> {
        self.entries.list().await
    }
}

/// Newest activity entries joined with their actor
pub struct ActivityLogsLoader {
    logs: ActivityLogRepository,
    limit: usize,
}

impl ActivityLogsLoader {
    pub fn new(store: SharedStore, limit: usize) -> Self {
        Self {
            logs: ActivityLogRepository::new(store),
            limit,
        }
    }
}

#[async_trait]
impl EntityLoader for ActivityLogsLoader {
    type Item = ActivityLog;

    fn name(&self) -> &'static str {
        "activity logs"
    }

    async fn load(&self) -> StoreErrorResult<Vec<ActivityLog>> {
        self.logs.recent(self.limit).await
    }
}
