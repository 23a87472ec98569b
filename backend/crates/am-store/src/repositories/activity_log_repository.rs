use crate::repositories::{from_row, from_rows, to_row};
use crate::{ACTIVITY_LOGS_TABLE, Query, SharedStore, StoreErrorResult, UserRepository};

use am_core::{ActivityLog, NewActivityLog};

use std::collections::HashMap;

pub struct ActivityLogRepository {
    store: SharedStore,
}

impl ActivityLogRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// The `limit` newest entries, each joined with its actor
    pub async fn recent(&self, limit: usize) -> StoreErrorResult<Vec<ActivityLog>> {
        let query = Query::newest_first().limit(limit);
        let rows = self.store.select(ACTIVITY_LOGS_TABLE, &query).await?;
        let mut logs: Vec<ActivityLog> = from_rows(rows)?;

        if logs.iter().any(|l| l.user_id.is_some()) {
            let users: HashMap<_, _> = UserRepository::new(self.store.clone())
                .list()
                .await?
                .into_iter()
                .map(|u| (u.id, u))
                .collect();

            for log in &mut logs {
                log.user = log.user_id.and_then(|id| users.get(&id).cloned());
            }
        }

        Ok(logs)
    }

    pub async fn create(&self, entry: &NewActivityLog) -> StoreErrorResult<ActivityLog> {
        let row = self.store.insert(ACTIVITY_LOGS_TABLE, to_row(entry)?).await?;
        from_row(row)
    }
}
