//! Category and department REST API handlers
//!
//! Both tables share one set of handlers, instantiated per entry type in the
//! router. Anyone logged in may list; writes are admin only. Deleting an entry
//! leaves assets pointing at it untouched.

use crate::{
    AdminIdentity, ApiResult, AppState, CatalogListResponse, CatalogResponse, CurrentIdentity,
    DeleteResponse,
};

use am_core::{CatalogEntry, CatalogForm, Category, Department};
use am_session::Resource;
use am_store::CatalogRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use log::info;
use serde::Serialize;
use uuid::Uuid;

/// A lookup table served by the catalog handlers
pub trait CatalogView: CatalogEntry + Serialize {
    fn resource(state: &AppState) -> &Resource<Self>;
}

impl CatalogView for Category {
    fn resource(state: &AppState) -> &Resource<Self> {
        &state.resources.categories
    }
}

impl CatalogView for Department {
    fn resource(state: &AppState) -> &Resource<Self> {
        &state.resources.departments
    }
}

/// GET /api/v1/categories, GET /api/v1/departments
pub async fn list_entries<T: CatalogView>(
    State(state): State<AppState>,
    CurrentIdentity(_): CurrentIdentity,
) -> ApiResult<Json<CatalogListResponse<T>>> {
    let items = state.read(T::resource(&state)).await?;

    Ok(Json(CatalogListResponse { items }))
}

/// POST /api/v1/categories, POST /api/v1/departments
pub async fn create_entry<T: CatalogView>(
    State(state): State<AppState>,
    AdminIdentity(admin): AdminIdentity,
    Json(form): Json<CatalogForm>,
) -> ApiResult<(StatusCode, Json<CatalogResponse<T>>)> {
    let row = form.validate()?;

    let item: T = CatalogRepository::new(state.store.clone())
        .create(&row)
        .await?;
    info!("{} created {} {}", admin.email, T::LABEL, item.name());
    state.bus.trigger_refresh();

    Ok((StatusCode::CREATED, Json(CatalogResponse { item })))
}

/// PUT /api/v1/categories/{id}, PUT /api/v1/departments/{id}
pub async fn update_entry<T: CatalogView>(
    State(state): State<AppState>,
    AdminIdentity(admin): AdminIdentity,
    Path(id): Path<String>,
    Json(form): Json<CatalogForm>,
) -> ApiResult<Json<CatalogResponse<T>>> {
    let entry_id = Uuid::parse_str(&id)?;
    let row = form.validate()?;

    let item: T = CatalogRepository::new(state.store.clone())
        .update(entry_id, &row)
        .await?;
    info!("{} updated {} {}", admin.email, T::LABEL, item.name());
    state.bus.trigger_refresh();

    Ok(Json(CatalogResponse { item }))
}

/// DELETE /api/v1/categories/{id}, DELETE /api/v1/departments/{id}
pub async fn delete_entry<T: CatalogView>(
    State(state): State<AppState>,
    AdminIdentity(admin): AdminIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let entry_id = Uuid::parse_str(&id)?;

    CatalogRepository::<T>::new(state.store.clone())
        .delete(entry_id)
        .await?;
    info!("{} deleted {} {entry_id}", admin.email, T::LABEL);
    state.bus.trigger_refresh();

    Ok(Json(DeleteResponse::new(entry_id)))
}
