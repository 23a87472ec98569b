use am_warranty::{RegisterResponse, WizardState};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WarrantyRegisterResponse {
    pub result: RegisterResponse,
    pub wizard: WizardState,
}
