mod data_store;
mod error;
mod memory_store;
mod query;
mod repositories;
mod rest_store;
mod seed;

#[cfg(test)]
mod tests;

pub use data_store::{DataStore, SharedStore};
pub use error::{Result as StoreErrorResult, StoreError};
pub use memory_store::MemoryStore;
pub use query::{Order, Query};
pub use repositories::activity_log_repository::ActivityLogRepository;
pub use repositories::asset_repository::AssetRepository;
pub use repositories::catalog_repository::{
    CatalogRepository, CategoryRepository, DepartmentRepository,
};
pub use repositories::user_repository::UserRepository;
pub use rest_store::RestStore;
pub use seed::{SeedReport, seed_sample_data};

// Remote table names
pub const USERS_TABLE: &str = "app_users";
pub const ASSETS_TABLE: &str = "assets";
pub const ACTIVITY_LOGS_TABLE: &str = "activity_logs";

pub const DEFAULT_IMAGE_BUCKET: &str = "asset-images";
