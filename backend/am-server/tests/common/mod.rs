//! Router harness over the in-memory store seeded with sample data.

#![allow(dead_code)]

use am_config::Config;
use am_server::{AppState, build_router};
use am_session::MemoryKeyValueStore;
use am_store::{DataStore, MemoryStore, SharedStore, seed_sample_data};
use am_warranty::WarrantyClient;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@eport.cloud";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const USER_EMAIL: &str = "user@eport.cloud";
pub const USER_PASSWORD: &str = "user123";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub memory: Arc<MemoryStore>,
    pub persisted: Arc<MemoryKeyValueStore>,
}

pub async fn app() -> TestApp {
    app_with_warranty("http://127.0.0.1:9/api/warranty").await
}

pub async fn app_with_warranty(warranty_url: &str) -> TestApp {
    let memory = Arc::new(MemoryStore::new());
    let store: SharedStore = memory.clone() as Arc<dyn DataStore>;
    seed_sample_data(&store).await.unwrap();

    let persisted = Arc::new(MemoryKeyValueStore::new());
    let warranty = Arc::new(
        WarrantyClient::new(warranty_url, Duration::from_secs(5), persisted.clone()).unwrap(),
    );

    let state = AppState::new(store, persisted.clone(), warranty, &Config::default());
    state.restore_session().await;

    TestApp {
        router: build_router(state.clone()),
        state,
        memory,
        persisted,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).unwrap_or(Value::Null)
    }
}

impl TestApp {
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            headers,
            text: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.request(request).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.post(
            "/api/v1/session/login",
            json!({ "email": email, "password": password }),
        )
        .await
    }

    pub async fn login_admin(&self) {
        let response = self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text);
    }

    pub async fn login_user(&self) {
        let response = self.login(USER_EMAIL, USER_PASSWORD).await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text);
    }

    /// Id of the lookup entry named `name` under `/api/v1/{table}`
    pub async fn catalog_id(&self, table: &str, name: &str) -> String {
        let response = self.get(&format!("/api/v1/{table}")).await;
        response.json()["items"]
            .as_array()
            .unwrap()
            .iter()
            .find(|item| item["name"] == name)
            .map(|item| item["id"].as_str().unwrap().to_string())
            .unwrap()
    }

    /// Create "Dell Laptop" (Electronics, IT, 1200.00, 2024-01-15) as the
    /// logged-in user
    pub async fn create_dell_laptop(&self) -> Value {
        let category_id = self.catalog_id("categories", "Electronics").await;
        let department_id = self.catalog_id("departments", "IT Department").await;

        let response = self
            .post(
                "/api/v1/assets",
                json!({
                    "name": "Dell Laptop",
                    "category_id": category_id,
                    "department_id": department_id,
                    "date_purchased": "2024-01-15",
                    "cost": "1200.00"
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
        response.json()["asset"].clone()
    }
}
