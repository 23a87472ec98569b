//! Shared application state handed to every handler.
//!
//! Long-lived resources (users, all assets, categories, departments, recent
//! activity) are mounted once at startup. The "my assets" resource belongs to
//! whoever is logged in: it is mounted on login or restore and unmounted on
//! logout.

use crate::{ApiError, ApiResult};

use am_config::Config;
use am_core::{ActivityLog, Asset, Category, Department, Identity};
use am_session::{
    ActivityLogsLoader, AssetsLoader, CategoriesLoader, DepartmentsLoader, KeyValueStore,
    RefreshBus, Resource, SessionStore, UsersLoader,
};
use am_store::SharedStore;
use am_warranty::{WarrantyClient, WarrantyWizard};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Resources shared by every view
pub struct Resources {
    pub users: Resource<Identity>,
    pub assets: Resource<Asset>,
    pub categories: Resource<Category>,
    pub departments: Resource<Department>,
    pub activity: Resource<ActivityLog>,
}

impl Resources {
    pub fn mount(store: &SharedStore, bus: &RefreshBus, activity_limit: usize) -> Self {
        Self {
            users: Resource::mount(UsersLoader::new(store.clone()), bus),
            assets: Resource::mount(AssetsLoader::new(store.clone(), None), bus),
            categories: Resource::mount(CategoriesLoader::new(store.clone()), bus),
            departments: Resource::mount(DepartmentsLoader::new(store.clone()), bus),
            activity: Resource::mount(ActivityLogsLoader::new(store.clone(), activity_limit), bus),
        }
    }

    pub fn mounted_count(&self) -> usize {
        [
            self.users.is_mounted(),
            self.assets.is_mounted(),
            self.categories.is_mounted(),
            self.departments.is_mounted(),
            self.activity.is_mounted(),
        ]
        .into_iter()
        .filter(|mounted| *mounted)
        .count()
    }

    pub fn unmount_all(&self) {
        self.users.unmount();
        self.assets.unmount();
        self.categories.unmount();
        self.departments.unmount();
        self.activity.unmount();
    }
}

/// The logged-in user's own assets
pub struct MyAssets {
    pub owner: Uuid,
    pub resource: Arc<Resource<Asset>>,
}

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub store_backend: &'static str,
    pub bus: RefreshBus,
    pub session: Arc<SessionStore>,
    pub resources: Arc<Resources>,
    pub my_assets: Arc<RwLock<Option<MyAssets>>>,
    pub warranty: Arc<WarrantyWizard>,
    pub image_bucket: String,
    pub read_timeout: Duration,
}

impl AppState {
    /// Wire the session, bus, shared resources and warranty wizard together.
    ///
    /// Must run inside a tokio runtime: mounting spawns the hook tasks.
    pub fn new(
        store: SharedStore,
        persisted: Arc<dyn KeyValueStore>,
        warranty: Arc<WarrantyClient>,
        config: &Config,
    ) -> Self {
        let bus = RefreshBus::new();
        let session = SessionStore::new(store.clone(), persisted, &config.session.admin_email);
        let resources = Resources::mount(&store, &bus, config.session.activity_log_limit);

        Self {
            store,
            store_backend: config.store.backend.as_str(),
            bus,
            session: Arc::new(session),
            resources: Arc::new(resources),
            my_assets: Arc::new(RwLock::new(None)),
            warranty: Arc::new(WarrantyWizard::new(warranty)),
            image_bucket: config.store.image_bucket.clone(),
            read_timeout: Duration::from_secs(config.server.read_timeout_secs),
        }
    }

    /// Restore the persisted session and mount its assets
    pub async fn restore_session(&self) {
        self.session.restore().await;

        if let Some(identity) = self.session.current().await {
            self.mount_my_assets(identity.id).await;
        }
    }

    /// Mount "my assets" for `owner`, reusing the current mount when it
    /// already belongs to them
    pub async fn mount_my_assets(&self, owner: Uuid) -> Arc<Resource<Asset>> {
        let mut mine = self.my_assets.write().await;

        if let Some(current) = mine.as_ref()
            && current.owner == owner
        {
            return current.resource.clone();
        }

        if let Some(previous) = mine.take() {
            previous.resource.unmount();
        }

        let resource = Arc::new(Resource::mount(
            AssetsLoader::new(self.store.clone(), Some(owner)),
            &self.bus,
        ));
        *mine = Some(MyAssets {
            owner,
            resource: resource.clone(),
        });
        resource
    }

    pub async fn unmount_my_assets(&self) {
        if let Some(previous) = self.my_assets.write().await.take() {
            previous.resource.unmount();
        }
    }

    /// Read a resource after it has caught up with the current refresh tick.
    ///
    /// Waits at most `read_timeout`; on timeout the latest published state is
    /// used. A failed fetch becomes [`ApiError::Store`].
    pub async fn read<T: Clone + Send + Sync + 'static>(
        &self,
        resource: &Resource<T>,
    ) -> ApiResult<Vec<T>> {
        let tick = self.bus.current();

        let state = match tokio::time::timeout(self.read_timeout, resource.settled_after(tick)).await
        {
            Ok(state) => state,
            Err(_) => {
                warn!("Resource did not settle at tick {tick} within {:?}", self.read_timeout);
                resource.snapshot()
            }
        };

        match state.error {
            Some(message) => Err(ApiError::store(message)),
            None => {
                debug!("Read {} items at tick {:?}", state.items.len(), state.tick);
                Ok(state.items)
            }
        }
    }
}
