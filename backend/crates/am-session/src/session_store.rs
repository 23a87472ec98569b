//! Who is logged in.
//!
//! Every operation degrades to `false`/`None`; failures are logged and never
//! propagated. The persisted record is the full identity as plain JSON.

use crate::KeyValueStore;

use am_core::{Identity, NewIdentity};
use am_store::{SharedStore, UserRepository};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};
use tokio::sync::RwLock;

/// Persisted-state key holding the current identity
pub const SESSION_KEY: &str = "asset_manager_user";

pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password";

pub struct SessionStore {
    users: UserRepository,
    state: Arc<dyn KeyValueStore>,
    admin_email: String,
    current: RwLock<Option<Identity>>,
    last_login_error: RwLock<Option<String>>,
    loading: AtomicBool,
}

impl SessionStore {
    /// `admin_email` always logs in with the admin role
    pub fn new(store: SharedStore, state: Arc<dyn KeyValueStore>, admin_email: &str) -> Self {
        Self {
            users: UserRepository::new(store),
            state,
            admin_email: admin_email.to_string(),
            current: RwLock::new(None),
            last_login_error: RwLock::new(None),
            loading: AtomicBool::new(true),
        }
    }

    /// Load the persisted identity, if any. Ends the initial loading state.
    pub async fn restore(&self) {
        if let Some(raw) = self.state.get(SESSION_KEY) {
            match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => {
                    info!("Restored session for {}", identity.email);
                    *self.current.write().await = Some(identity);
                }
                Err(e) => {
                    warn!("Dropping unreadable persisted session: {e}");
                    if let Err(e) = self.state.remove(SESSION_KEY) {
                        warn!("Failed to clear persisted session: {e}");
                    }
                }
            }
        }

        self.loading.store(false, Ordering::SeqCst);
    }

    /// True until [`restore`](Self::restore) has run
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Succeeds iff exactly one active user matches both fields exactly
    pub async fn login(&self, email: &str, password: &str) -> bool {
        *self.current.write().await = None;
        *self.last_login_error.write().await = None;
        if let Err(e) = self.state.remove(SESSION_KEY) {
            warn!("Failed to clear persisted session: {e}");
        }

        let failure = match self.users.find_by_credentials(email, password).await {
            Ok(mut matches) if matches.len() == 1 => {
                let mut identity = matches.remove(0);
                if identity.email == self.admin_email {
                    identity = identity.promoted();
                }

                self.persist(&identity);
                info!("Logged in as {} ({})", identity.email, identity.role);
                *self.current.write().await = Some(identity);
                return true;
            }
            Ok(matches) => {
                debug!("Login for {email} matched {} rows", matches.len());
                LOGIN_FAILED_MESSAGE.to_string()
            }
            Err(e) => {
                warn!("Login query failed: {e}");
                e.message()
            }
        };

        *self.last_login_error.write().await = Some(failure);
        false
    }

    /// Message from the most recent failed login
    pub async fn last_login_error(&self) -> Option<String> {
        self.last_login_error.read().await.clone()
    }

    /// Clears memory and the persisted record; no remote call
    pub async fn logout(&self) {
        if let Some(identity) = self.current.write().await.take() {
            info!("Logged out {}", identity.email);
        }

        if let Err(e) = self.state.remove(SESSION_KEY) {
            warn!("Failed to clear persisted session: {e}");
        }
    }

    /// Create an active, non-admin account. Relies on the store's unique
    /// email constraint.
    pub async fn signup(&self, full_name: &str, email: &str, password: &str) -> bool {
        let user = NewIdentity::signup(
            full_name.to_string(),
            email.to_string(),
            password.to_string(),
        );

        match self.users.create(&user).await {
            Ok(identity) => {
                info!("Signed up {}", identity.email);
                true
            }
            Err(e) => {
                warn!("Signup for {email} failed: {e}");
                false
            }
        }
    }

    pub async fn current(&self) -> Option<Identity> {
        self.current.read().await.clone()
    }

    pub async fn is_admin(&self) -> bool {
        self.current
            .read()
            .await
            .as_ref()
            .is_some_and(Identity::is_admin)
    }

    fn persist(&self, identity: &Identity) {
        let result = serde_json::to_string(identity)
            .map_err(crate::SessionError::from)
            .and_then(|raw| self.state.set(SESSION_KEY, &raw));

        if let Err(e) = result {
            warn!("Failed to persist session: {e}");
        }
    }
}
