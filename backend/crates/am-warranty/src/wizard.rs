//! Two-step warranty registration: log in to the warranty API, then submit
//! the registration for one asset. Leaving the wizard in any way logs out.

use crate::{RegisterResponse, WarrantyClient, WarrantyError, WarrantyErrorResult, WarrantyForm};

use am_core::Asset;

use std::panic::Location;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use error_location::ErrorLocation;
use log::{info, warn};
use serde::Serialize;

pub const REGISTER_FAILED_MESSAGE: &str = "Failed to register warranty";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Login,
    Warranty,
}

impl WizardStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Warranty => "warranty",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WizardState {
    pub open: bool,
    pub step: WizardStep,
    pub form: WarrantyForm,
    pub error: Option<String>,
}

pub struct WarrantyWizard {
    client: Arc<WarrantyClient>,
    state: Mutex<WizardState>,
    /// Bumped by open, back and close; in-flight logins from an older
    /// generation are discarded.
    generation: AtomicU64,
}

impl WarrantyWizard {
    pub fn new(client: Arc<WarrantyClient>) -> Self {
        Self {
            client,
            state: Mutex::new(WizardState::default()),
            generation: AtomicU64::new(0),
        }
    }

    fn state(&self) -> MutexGuard<'_, WizardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> WizardState {
        self.state().clone()
    }

    /// Start at the login step with the form prefilled from `asset`
    pub fn open(&self, asset: &Asset) {
        let mut state = self.state();
        self.generation.fetch_add(1, Ordering::SeqCst);
        *state = WizardState {
            open: true,
            step: WizardStep::Login,
            form: WarrantyForm {
                asset_id: asset.id.to_string(),
                asset_name: asset.name.clone(),
                serial_number: String::new(),
                purchase_date: asset.date_purchased.format("%Y-%m-%d").to_string(),
            },
            error: None,
        };
    }

    /// Moves to the warranty step on success; records the error otherwise.
    ///
    /// A login that completes after the wizard was closed, reopened or sent
    /// back is discarded and its token dropped.
    pub async fn submit_login(&self, username: &str, password: &str) -> bool {
        let generation = {
            let mut state = self.state();
            if !state.open || state.step != WizardStep::Login {
                state.error = Some(format!("Wizard is not on the {} step", WizardStep::Login.as_str()));
                return false;
            }
            state.error = None;
            self.generation.load(Ordering::SeqCst)
        };

        let result = self.client.login(username, password).await;

        let mut state = self.state();
        if self.generation.load(Ordering::SeqCst) != generation
            || !state.open
            || state.step != WizardStep::Login
        {
            let superseded_by_login = state.open && state.step == WizardStep::Warranty;
            drop(state);
            info!("Discarding warranty login that finished after the wizard moved on");
            if result.is_ok() && !superseded_by_login {
                self.client.logout();
            }
            return false;
        }

        match result {
            Ok(_) => {
                state.step = WizardStep::Warranty;
                state.error = None;
                true
            }
            Err(e) => {
                state.error = Some(e.message());
                false
            }
        }
    }

    /// Submit the registration. Success closes the wizard.
    ///
    /// Only `asset_name` and `serial_number` are taken from `input`; the asset
    /// id and purchase date stay as prefilled by [`open`](Self::open).
    pub async fn submit_warranty(&self, input: WarrantyForm) -> WarrantyErrorResult<RegisterResponse> {
        let form = {
            let mut state = self.state();
            if !state.open || state.step != WizardStep::Warranty {
                return Err(WarrantyError::InvalidStep {
                    expected: WizardStep::Warranty.as_str(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            if !input.asset_id.is_empty() && input.asset_id != state.form.asset_id {
                warn!(
                    "Ignoring asset {} in warranty form; wizard is open on {}",
                    input.asset_id, state.form.asset_id
                );
            }
            state.form.asset_name = input.asset_name;
            state.form.serial_number = input.serial_number;
            state.error = None;
            state.form.clone()
        };

        let result = match validate(&form) {
            Ok(()) => self.client.register_warranty(&form).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(response) if response.success => {
                info!("Registered warranty for asset {}", form.asset_id);
                self.close();
                Ok(response)
            }
            Ok(response) => {
                let message = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| REGISTER_FAILED_MESSAGE.to_string());
                self.state().error = Some(message.clone());
                Err(WarrantyError::Rejected {
                    message,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => {
                self.state().error = Some(e.message());
                Err(e)
            }
        }
    }

    /// Return to the login step and drop the token
    pub fn back(&self) {
        {
            let mut state = self.state();
            self.generation.fetch_add(1, Ordering::SeqCst);
            state.step = WizardStep::Login;
            state.error = None;
        }
        self.client.logout();
    }

    /// Reset everything and drop the token
    pub fn close(&self) {
        {
            let mut state = self.state();
            self.generation.fetch_add(1, Ordering::SeqCst);
            *state = WizardState::default();
        }
        self.client.logout();
    }
}

fn validate(form: &WarrantyForm) -> WarrantyErrorResult<()> {
    let required = [
        ("asset_id", &form.asset_id, "Asset is required"),
        ("asset_name", &form.asset_name, "Asset name is required"),
        ("serial_number", &form.serial_number, "Serial number is required"),
        ("purchase_date", &form.purchase_date, "Purchase date is required"),
    ];

    for (field, value, message) in required {
        if value.trim().is_empty() {
            return Err(WarrantyError::validation(field, message));
        }
    }

    Ok(())
}
