mod query;

use crate::{DataStore, MemoryStore, SharedStore};

use std::sync::Arc;

pub(crate) fn memory_store() -> (Arc<MemoryStore>, SharedStore) {
    let memory = Arc::new(MemoryStore::new());
    let shared: SharedStore = memory.clone() as Arc<dyn DataStore>;
    (memory, shared)
}
