//! Warranty wizard REST API handlers
//!
//! The wizard is a single modal per process: open it on an asset, log in to
//! the warranty service, submit the registration. Every response carries the
//! wizard state so the front-end can render the current step.

use crate::{
    ApiError, ApiResult, AppState, CurrentIdentity, OpenWarrantyRequest, WarrantyLoginRequest,
    WarrantyRegisterResponse,
};

use am_store::AssetRepository;
use am_warranty::{WarrantyForm, WizardState};

use axum::{Json, extract::State};
use uuid::Uuid;

/// GET /api/v1/warranty
pub async fn get_wizard(
    State(state): State<AppState>,
    CurrentIdentity(_): CurrentIdentity,
) -> Json<WizardState> {
    Json(state.warranty.snapshot())
}

/// POST /api/v1/warranty/open
pub async fn open_wizard(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Json(req): Json<OpenWarrantyRequest>,
) -> ApiResult<Json<WizardState>> {
    let asset_id = Uuid::parse_str(&req.asset_id)?;

    let asset = AssetRepository::new(state.store.clone())
        .find(asset_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Asset {asset_id} not found")))?;
    if !asset.editable_by(&identity) {
        return Err(ApiError::forbidden(
            "Only the owner or an admin can register a warranty",
        ));
    }

    state.warranty.open(&asset);

    Ok(Json(state.warranty.snapshot()))
}

/// POST /api/v1/warranty/login
///
/// A rejected login keeps the wizard on the login step with its error set;
/// the response is still 200 so the modal can show the message.
pub async fn login_wizard(
    State(state): State<AppState>,
    CurrentIdentity(_): CurrentIdentity,
    Json(req): Json<WarrantyLoginRequest>,
) -> Json<WizardState> {
    state
        .warranty
        .submit_login(&req.username, &req.password)
        .await;

    Json(state.warranty.snapshot())
}

/// POST /api/v1/warranty/register
///
/// The asset and purchase date come from the opened wizard, never the body.
pub async fn register_warranty(
    State(state): State<AppState>,
    CurrentIdentity(_): CurrentIdentity,
    Json(form): Json<WarrantyForm>,
) -> ApiResult<Json<WarrantyRegisterResponse>> {
    let result = state.warranty.submit_warranty(form).await?;

    Ok(Json(WarrantyRegisterResponse {
        result,
        wizard: state.warranty.snapshot(),
    }))
}

/// POST /api/v1/warranty/back
pub async fn back_wizard(
    State(state): State<AppState>,
    CurrentIdentity(_): CurrentIdentity,
) -> Json<WizardState> {
    state.warranty.back();

    Json(state.warranty.snapshot())
}

/// POST /api/v1/warranty/close
pub async fn close_wizard(
    State(state): State<AppState>,
    CurrentIdentity(_): CurrentIdentity,
) -> Json<WizardState> {
    state.warranty.close();

    Json(state.warranty.snapshot())
}
