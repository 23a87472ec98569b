mod access_token;
mod client;
mod error;
mod models;
mod wizard;

#[cfg(test)]
mod tests;

pub use access_token::AccessToken;
pub use client::{TOKEN_KEY, WarrantyClient, error_message};
pub use error::{Result as WarrantyErrorResult, WarrantyError};
pub use models::{LoginRequest, LoginResponse, RegisterResponse, WarrantyForm};
pub use wizard::{REGISTER_FAILED_MESSAGE, WarrantyWizard, WizardState, WizardStep};
