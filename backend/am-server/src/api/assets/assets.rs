//! Asset REST API handlers
//!
//! "My assets" reads come from the per-user resource; the admin table reads
//! the shared all-assets resource. Every write triggers a refresh.

use crate::{
    AdminIdentity, ApiError, ApiResult, AppState, AssetListResponse, AssetResponse,
    CurrentIdentity, DeleteResponse, MyAssetsQuery, UploadedImage,
};

use am_core::{Asset, AssetForm, CSV_FILENAME, assets_to_csv};
use am_session::create_asset as create_asset_flow;
use am_store::AssetRepository;

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::Local;
use log::info;
use uuid::Uuid;

async fn my_filtered_assets(
    state: &AppState,
    identity: &am_core::Identity,
    query: &MyAssetsQuery,
) -> ApiResult<Vec<Asset>> {
    let filter = query.to_filter()?;
    let resource = state.mount_my_assets(identity.id).await;
    let assets = state.read(&resource).await?;

    Ok(filter.apply(&assets))
}

/// GET /api/v1/assets/mine?search=&category_id=
pub async fn list_my_assets(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Query(query): Query<MyAssetsQuery>,
) -> ApiResult<Json<AssetListResponse>> {
    let assets = my_filtered_assets(&state, &identity, &query).await?;

    Ok(Json(AssetListResponse::from(assets)))
}

/// GET /api/v1/assets/mine/export.csv
///
/// Exports exactly the rows the filtered view shows.
pub async fn export_my_assets(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Query(query): Query<MyAssetsQuery>,
) -> ApiResult<impl IntoResponse> {
    let assets = my_filtered_assets(&state, &identity, &query).await?;
    let csv = assets_to_csv(&assets);

    Ok((
        [
            (header::CONTENT_TYPE, String::from("text/csv; charset=utf-8")),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CSV_FILENAME}\""),
            ),
        ],
        csv,
    ))
}

/// POST /api/v1/assets
///
/// Validate, insert, record activity, refresh. Waits for "my assets" to pick
/// up the new row before answering.
pub async fn create_asset(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Json(form): Json<AssetForm>,
) -> ApiResult<(StatusCode, Json<AssetResponse>)> {
    let today = Local::now().date_naive();
    let created = create_asset_flow(&state.store, &state.bus, &identity, &form, today).await?;

    let resource = state.mount_my_assets(identity.id).await;
    let _ = tokio::time::timeout(state.read_timeout, resource.settled_after(created.tick)).await;

    Ok((
        StatusCode::CREATED,
        Json(AssetResponse {
            asset: created.asset,
        }),
    ))
}

/// GET /api/v1/assets (admin)
pub async fn list_assets(
    State(state): State<AppState>,
    AdminIdentity(_): AdminIdentity,
) -> ApiResult<Json<AssetListResponse>> {
    let assets = state.read(&state.resources.assets).await?;

    Ok(Json(AssetListResponse::from(assets)))
}

/// PUT /api/v1/assets/{id} (admin)
pub async fn update_asset(
    State(state): State<AppState>,
    AdminIdentity(admin): AdminIdentity,
    Path(id): Path<String>,
    Json(form): Json<AssetForm>,
) -> ApiResult<Json<AssetResponse>> {
    let asset_id = Uuid::parse_str(&id)?;
    let draft = form.validate(Local::now().date_naive())?;

    let asset = AssetRepository::new(state.store.clone())
        .update(asset_id, &draft)
        .await?;
    info!("{} updated asset {} ({})", admin.email, asset.name, asset.id);
    state.bus.trigger_refresh();

    Ok(Json(AssetResponse { asset }))
}

/// DELETE /api/v1/assets/{id} (admin)
pub async fn delete_asset(
    State(state): State<AppState>,
    AdminIdentity(admin): AdminIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let asset_id = Uuid::parse_str(&id)?;

    AssetRepository::new(state.store.clone())
        .delete(asset_id)
        .await?;
    info!("{} deleted asset {asset_id}", admin.email);
    state.bus.trigger_refresh();

    Ok(Json(DeleteResponse::new(asset_id)))
}

/// POST /api/v1/assets/{id}/image (owner or admin)
///
/// Multipart body with a `file` field. The object is stored under
/// `{asset_id}/{file_name}` in the image bucket.
pub async fn upload_asset_image(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<String>,
    multipart: Multipart,
) -> ApiResult<Json<AssetResponse>> {
    let asset_id = Uuid::parse_str(&id)?;
    let assets = AssetRepository::new(state.store.clone());

    let existing = assets
        .find(asset_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Asset {id} not found")))?;
    if !existing.editable_by(&identity) {
        return Err(ApiError::forbidden("Only the owner or an admin can change this asset"));
    }

    let image = UploadedImage::from_multipart(multipart).await?;
    let asset = assets
        .attach_image(
            &state.image_bucket,
            asset_id,
            &image.file_name,
            image.bytes,
            &image.content_type,
        )
        .await?;
    info!(
        "{} uploaded image {} for asset {asset_id}",
        identity.email, image.file_name
    );
    state.bus.trigger_refresh();

    Ok(Json(AssetResponse { asset }))
}
