use crate::{DataStore, Query, StoreError, StoreErrorResult};

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde_json::Value;
use uuid::Uuid;

/// HTTP client for a PostgREST-style hosted backend with object storage
pub struct RestStore {
    pub base_url: String,
    api_key: String,
    client: ReqwestClient,
}

impl RestStore {
    /// Create a new store client
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://project.example.co")
    /// * `api_key` - Anonymous key sent as `apikey` and bearer token
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> StoreErrorResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    /// Build a request with the auth headers
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);

        self.client
            .request(method, &url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    fn table_path(table: &str) -> String {
        format!("/rest/v1/{table}")
    }

    fn id_filter(id: Uuid) -> [(&'static str, String); 1] {
        [("id", format!("eq.{id}"))]
    }

    /// Execute request and map error bodies to [`StoreError::Api`]
    async fn execute(&self, req: RequestBuilder) -> StoreErrorResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
            let field = |name: &str| body.get(name).and_then(Value::as_str).map(String::from);

            let code = field("code")
                .or_else(|| field("error"))
                .unwrap_or_else(|| status.as_u16().to_string());
            let message = field("message")
                .or_else(|| field("msg"))
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));

            return Err(StoreError::api(status.as_u16(), code, message));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Mutations return an array of affected rows; take the first one
    fn first_row(body: Value, table: &str, id: Option<Uuid>) -> StoreErrorResult<Value> {
        match body {
            Value::Array(rows) => match rows.into_iter().next() {
                Some(row) => Ok(row),
                None => match id {
                    Some(id) => Err(StoreError::not_found(table, id)),
                    None => Err(StoreError::api(
                        200,
                        "EMPTY_RESPONSE",
                        format!("{table}: no row returned"),
                    )),
                },
            },
            row @ Value::Object(_) => Ok(row),
            _ => Err(StoreError::api(
                200,
                "UNEXPECTED_RESPONSE",
                format!("{table}: expected a row in the response"),
            )),
        }
    }
}

#[async_trait]
impl DataStore for RestStore {
    async fn select(&self, table: &str, query: &Query) -> StoreErrorResult<Vec<Value>> {
        debug!("select {table} {:?}", query.to_params());

        let req = self
            .request(Method::GET, &Self::table_path(table))
            .query(&query.to_params());
        let body = self.execute(req).await?;

        match body {
            Value::Array(rows) => Ok(rows),
            Value::Null => Ok(Vec::new()),
            _ => Err(StoreError::api(
                200,
                "UNEXPECTED_RESPONSE",
                format!("{table}: expected an array of rows"),
            )),
        }
    }

    async fn insert(&self, table: &str, row: Value) -> StoreErrorResult<Value> {
        debug!("insert into {table}");

        let req = self
            .request(Method::POST, &Self::table_path(table))
            .header("Prefer", "return=representation")
            .json(&row);
        let body = self.execute(req).await?;

        Self::first_row(body, table, None)
    }

    async fn update(&self, table: &str, id: Uuid, changes: Value) -> StoreErrorResult<Value> {
        debug!("update {table} {id}");

        let req = self
            .request(Method::PATCH, &Self::table_path(table))
            .query(&Self::id_filter(id))
            .header("Prefer", "return=representation")
            .json(&changes);
        let body = self.execute(req).await?;

        Self::first_row(body, table, Some(id))
    }

    async fn delete(&self, table: &str, id: Uuid) -> StoreErrorResult<()> {
        debug!("delete {table} {id}");

        let req = self
            .request(Method::DELETE, &Self::table_path(table))
            .query(&Self::id_filter(id));
        self.execute(req).await?;

        Ok(())
    }

    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> StoreErrorResult<()> {
        debug!("upload {} bytes to {bucket}/{path}", bytes.len());

        let req = self
            .request(Method::POST, &format!("/storage/v1/object/{bucket}/{path}"))
            .header("Content-Type", content_type)
            .header("x-upsert", "true")
            .body(bytes);
        self.execute(req).await?;

        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/public/{bucket}/{path}", self.base_url)
    }
}
