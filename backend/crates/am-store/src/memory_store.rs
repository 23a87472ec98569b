//! In-process data store.
//!
//! Tables are created on first insert. Unique columns are checked on insert
//! and update and reported with the same code Postgres uses, so callers see
//! identical failures on both backends.

use crate::error::UNIQUE_VIOLATION_CODE;
use crate::{DataStore, Query, StoreError, StoreErrorResult, USERS_TABLE};

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, TimeDelta, Utc};
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

const MEMORY_BASE_URL: &str = "http://localhost";

#[derive(Default)]
struct Tables {
    rows: HashMap<String, Vec<Value>>,
    last_created_at: Option<DateTime<Utc>>,
}

pub struct MemoryStore {
    tables: RwLock<Tables>,
    objects: RwLock<HashMap<String, (Bytes, String)>>,
    unique: Vec<(String, String)>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Empty store with `app_users.email` unique
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            objects: RwLock::new(HashMap::new()),
            unique: vec![(USERS_TABLE.to_string(), String::from("email"))],
        }
    }

    /// Add a unique constraint on `table.column`
    pub fn with_unique(mut self, table: &str, column: &str) -> Self {
        self.unique.push((table.to_string(), column.to_string()));
        self
    }

    /// Stored object bytes and content type
    pub async fn object(&self, bucket: &str, path: &str) -> Option<(Bytes, String)> {
        self.objects
            .read()
            .await
            .get(&format!("{bucket}/{path}"))
            .cloned()
    }

    /// Number of rows currently in `table`
    pub async fn row_count(&self, table: &str) -> usize {
        self.tables
            .read()
            .await
            .rows
            .get(table)
            .map_or(0, Vec::len)
    }

    fn check_unique(
        &self,
        table: &str,
        rows: &[Value],
        candidate: &Map<String, Value>,
        skip_id: Option<&Value>,
    ) -> StoreErrorResult<()> {
        for (_, column) in self.unique.iter().filter(|(t, _)| t == table) {
            let Some(value) = candidate.get(column).filter(|v| !v.is_null()) else {
                continue;
            };

            let clash = rows.iter().any(|row| {
                row.get(column) == Some(value) && skip_id.is_none_or(|id| row.get("id") != Some(id))
            });

            if clash {
                return Err(StoreError::api(
                    409,
                    UNIQUE_VIOLATION_CODE,
                    format!("duplicate key value violates unique constraint \"{table}_{column}_key\""),
                ));
            }
        }

        Ok(())
    }

    /// Strictly increasing so "newest first" ordering is total
    fn next_created_at(tables: &mut Tables) -> DateTime<Utc> {
        let mut now = Utc::now();
        if let Some(last) = tables.last_created_at
            && now <= last
        {
            now = last + TimeDelta::microseconds(1);
        }
        tables.last_created_at = Some(now);
        now
    }
}

fn into_object(table: &str, value: Value) -> StoreErrorResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::api(
            400,
            "PGRST102",
            format!("{table}: row must be a JSON object"),
        )),
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn select(&self, table: &str, query: &Query) -> StoreErrorResult<Vec<Value>> {
        let tables = self.tables.read().await;
        let rows = tables
            .rows
            .get(table)
            .map(|rows| rows.iter().filter(|r| query.matches(r)).cloned().collect())
            .unwrap_or_default();

        Ok(query.shape(rows))
    }

    async fn insert(&self, table: &str, row: Value) -> StoreErrorResult<Value> {
        let mut row = into_object(table, row)?;
        let mut tables = self.tables.write().await;

        if !row.get("id").is_some_and(Value::is_string) {
            row.insert(String::from("id"), Value::String(Uuid::new_v4().to_string()));
        }
        if !row.get("created_at").is_some_and(Value::is_string) {
            let created_at = Self::next_created_at(&mut tables);
            row.insert(
                String::from("created_at"),
                Value::String(created_at.to_rfc3339()),
            );
        }

        let existing = tables.rows.get(table).map(Vec::as_slice).unwrap_or_default();
        self.check_unique(table, existing, &row, None)?;

        let row = Value::Object(row);
        tables
            .rows
            .entry(table.to_string())
            .or_default()
            .push(row.clone());

        Ok(row)
    }

    async fn update(&self, table: &str, id: Uuid, changes: Value) -> StoreErrorResult<Value> {
        let changes = into_object(table, changes)?;
        let mut tables = self.tables.write().await;
        let id_value = Value::String(id.to_string());

        let rows = tables
            .rows
            .get_mut(table)
            .ok_or_else(|| StoreError::not_found(table, id))?;
        let index = rows
            .iter()
            .position(|r| r.get("id") == Some(&id_value))
            .ok_or_else(|| StoreError::not_found(table, id))?;

        let mut merged = into_object(table, rows[index].clone())?;
        for (key, value) in changes {
            merged.insert(key, value);
        }
        self.check_unique(table, rows, &merged, Some(&id_value))?;

        let merged = Value::Object(merged);
        rows[index] = merged.clone();

        Ok(merged)
    }

    async fn delete(&self, table: &str, id: Uuid) -> StoreErrorResult<()> {
        let mut tables = self.tables.write().await;
        let id_value = Value::String(id.to_string());

        if let Some(rows) = tables.rows.get_mut(table) {
            rows.retain(|r| r.get("id") != Some(&id_value));
        }

        Ok(())
    }

    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> StoreErrorResult<()> {
        self.objects.write().await.insert(
            format!("{bucket}/{path}"),
            (bytes, content_type.to_string()),
        );

        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{MEMORY_BASE_URL}/storage/v1/object/public/{bucket}/{path}")
    }
}
