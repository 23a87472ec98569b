mod error;
mod key_value_store;
mod loaders;
mod mutations;
mod refresh_bus;
mod resource;
mod session_store;

#[cfg(test)]
mod tests;

pub use error::{Result as SessionErrorResult, SessionError};
pub use key_value_store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use loaders::{
    ActivityLogsLoader, AssetsLoader, CatalogLoader, CategoriesLoader, DEFAULT_ACTIVITY_LIMIT,
    DepartmentsLoader, UsersLoader,
};
pub use mutations::{AssetCreated, create_asset};
pub use refresh_bus::RefreshBus;
pub use resource::{EntityLoader, LoadState, Resource};
pub use session_store::{LOGIN_FAILED_MESSAGE, SESSION_KEY, SessionStore};
