mod mutations;
mod refresh_bus;

use crate::{MemoryKeyValueStore, SessionStore};

use am_core::{NewIdentity, Role};
use am_store::{DataStore, MemoryStore, SharedStore, UserRepository};

use std::sync::Arc;

pub(crate) const ADMIN_EMAIL: &str = "admin@eport.cloud";

pub(crate) struct Fixture {
    pub store: SharedStore,
    pub state: Arc<MemoryKeyValueStore>,
    pub session: SessionStore,
}

pub(crate) fn fixture() -> Fixture {
    let store: SharedStore = Arc::new(MemoryStore::new()) as Arc<dyn DataStore>;
    let state = Arc::new(MemoryKeyValueStore::new());
    let session = SessionStore::new(store.clone(), state.clone(), ADMIN_EMAIL);

    Fixture {
        store,
        state,
        session,
    }
}

pub(crate) async fn add_user(store: &SharedStore, email: &str, password: &str, role: Role, is_active: bool) {
    UserRepository::new(store.clone())
        .create(&NewIdentity {
            email: email.to_string(),
            full_name: format!("{email} name"),
            password: password.to_string(),
            role,
            is_active,
        })
        .await
        .unwrap();
}
