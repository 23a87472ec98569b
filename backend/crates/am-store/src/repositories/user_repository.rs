use crate::repositories::{from_row, from_rows, to_row};
use crate::{Query, SharedStore, StoreErrorResult, USERS_TABLE};

use am_core::{Identity, IdentityChanges, NewIdentity};

use serde_json::json;
use uuid::Uuid;

/// Columns of `app_users` that make up an [`Identity`]; never the password
const IDENTITY_COLUMNS: &str = "id,email,full_name,role,is_active,created_at";

pub struct UserRepository {
    store: SharedStore,
}

impl UserRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// All users, newest first
    pub async fn list(&self) -> StoreErrorResult<Vec<Identity>> {
        let query = Query::newest_first().select(IDENTITY_COLUMNS);
        let rows = self.store.select(USERS_TABLE, &query).await?;
        from_rows(rows)
    }

    /// Active users whose email and password both match exactly
    pub async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> StoreErrorResult<Vec<Identity>> {
        let query = Query::new()
            .select(IDENTITY_COLUMNS)
            .eq("email", email)
            .eq("password", password)
            .eq("is_active", true);
        let rows = self.store.select(USERS_TABLE, &query).await?;
        from_rows(rows)
    }

    pub async fn find_by_email(&self, email: &str) -> StoreErrorResult<Option<Identity>> {
        let query = Query::new()
            .select(IDENTITY_COLUMNS)
            .eq("email", email)
            .limit(1);
        let rows = self.store.select(USERS_TABLE, &query).await?;
        Ok(from_rows(rows)?.into_iter().next())
    }

    pub async fn create(&self, user: &NewIdentity) -> StoreErrorResult<Identity> {
        let row = self.store.insert(USERS_TABLE, to_row(user)?).await?;
        from_row(row)
    }

    pub async fn update(&self, id: Uuid, changes: &IdentityChanges) -> StoreErrorResult<Identity> {
        let row = self.store.update(USERS_TABLE, id, to_row(changes)?).await?;
        from_row(row)
    }

    pub async fn set_active(&self, id: Uuid, is_active: bool) -> StoreErrorResult<Identity> {
        let row = self
            .store
            .update(USERS_TABLE, id, json!({ "is_active": is_active }))
            .await?;
        from_row(row)
    }

    pub async fn delete(&self, id: Uuid) -> StoreErrorResult<()> {
        self.store.delete(USERS_TABLE, id).await
    }
}
