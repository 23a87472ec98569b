use crate::{
    AccessToken, LoginRequest, LoginResponse, RegisterResponse, WarrantyError,
    WarrantyErrorResult, WarrantyForm,
};

use am_session::KeyValueStore;

use std::panic::Location;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use error_location::ErrorLocation;
use log::{debug, info, warn};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// Persisted-state key holding the warranty access token
pub const TOKEN_KEY: &str = "warranty_access_token";

/// HTTP client for the warranty API
pub struct WarrantyClient {
    pub base_url: String,
    client: ReqwestClient,
    state: Arc<dyn KeyValueStore>,
    token: RwLock<Option<AccessToken>>,
}

impl WarrantyClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://127.0.0.1:8000/api/warranty")
    /// * `timeout` - Per-request timeout
    /// * `state` - Where the access token is persisted
    pub fn new(
        base_url: &str,
        timeout: Duration,
        state: Arc<dyn KeyValueStore>,
    ) -> WarrantyErrorResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            state,
            token: RwLock::new(None),
        })
    }

    /// Token from memory, falling back to persisted state
    pub fn access_token(&self) -> Option<AccessToken> {
        if let Some(token) = self
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Some(token);
        }

        let stored = self.state.get(TOKEN_KEY).map(AccessToken::new)?;
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(stored.clone());
        Some(stored)
    }

    /// A token is held and has not expired
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some_and(|t| !t.is_expired())
    }

    fn set_access_token(&self, token: AccessToken) {
        debug!("Setting warranty access token {}", token.prefix());
        if let Err(e) = self.state.set(TOKEN_KEY, token.as_str()) {
            warn!("Failed to persist warranty token: {e}");
        }
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    /// Forget the token in memory and in persisted state
    pub fn logout(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        if let Err(e) = self.state.remove(TOKEN_KEY) {
            warn!("Failed to clear warranty token: {e}");
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and map non-2xx responses to [`WarrantyError::Api`]
    async fn execute(&self, req: RequestBuilder) -> WarrantyErrorResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body = serde_json::from_str(&text).unwrap_or(Value::Null);
            return Err(WarrantyError::Api {
                status: status.as_u16(),
                message: error_message(status, &body),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    async fn post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        token: Option<&AccessToken>,
    ) -> WarrantyErrorResult<Value> {
        let mut req = self.request(Method::POST, path).json(body);
        if let Some(token) = token {
            req = req.bearer_auth(token.as_str());
        }
        self.execute(req).await
    }

    pub async fn login(&self, username: &str, password: &str) -> WarrantyErrorResult<LoginResponse> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let value = self.post("/login/", &body, None).await?;
        let response: LoginResponse = serde_json::from_value(value)?;

        let access = response
            .access
            .clone()
            .ok_or_else(|| WarrantyError::MissingAccessToken {
                location: ErrorLocation::from(Location::caller()),
            })?;
        self.set_access_token(AccessToken::new(access));
        info!("Logged in to warranty API as {username}");

        Ok(response)
    }

    /// Rejected locally without a live token
    pub async fn register_warranty(
        &self,
        form: &WarrantyForm,
    ) -> WarrantyErrorResult<RegisterResponse> {
        let token = self
            .access_token()
            .ok_or_else(WarrantyError::not_authenticated)?;

        if token.is_expired() {
            warn!("Warranty token {} has expired", token.prefix());
            self.logout();
            return Err(WarrantyError::token_expired());
        }

        let value = self.post("/register/", form, Some(&token)).await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// First of `detail`, `message`, `error`, `non_field_errors[0]`, else
/// `API Error: {status}`
pub fn error_message(status: StatusCode, body: &Value) -> String {
    let text = |key: &str| {
        body.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(String::from)
    };

    text("detail")
        .or_else(|| text("message"))
        .or_else(|| text("error"))
        .or_else(|| {
            body.get("non_field_errors")
                .and_then(|v| v.get(0))
                .and_then(Value::as_str)
                .map(String::from)
        })
        .unwrap_or_else(|| format!("API Error: {status}"))
}
