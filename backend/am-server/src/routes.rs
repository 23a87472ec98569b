use crate::{
    AppState, back_wizard, close_wizard, create_asset, create_entry, create_user, delete_asset,
    delete_entry, delete_user, export_my_assets, get_dashboard, get_session, get_wizard, health,
    list_activity, list_assets, list_entries, list_my_assets, list_users, login, login_wizard,
    logout, open_wizard, register_warranty, signup, toggle_user_active, update_asset,
    update_entry, update_user, upload_asset_image,
};

use am_core::{Category, Department};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Largest accepted image upload
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        // Browser front-end is served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Session
        .route("/session", get(get_session))
        .route("/session/login", post(login))
        .route("/session/logout", post(logout))
        .route("/session/signup", post(signup))
        // Views
        .route("/dashboard", get(get_dashboard))
        .route("/activity", get(list_activity))
        // Assets
        .route("/assets", get(list_assets).post(create_asset))
        .route("/assets/mine", get(list_my_assets))
        .route("/assets/mine/export.csv", get(export_my_assets))
        .route("/assets/{id}", put(update_asset).delete(delete_asset))
        .route(
            "/assets/{id}/image",
            post(upload_asset_image).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        // Users
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", put(update_user).delete(delete_user))
        .route("/users/{id}/toggle-active", post(toggle_user_active))
        // Lookup tables
        .route(
            "/categories",
            get(list_entries::<Category>).post(create_entry::<Category>),
        )
        .route(
            "/categories/{id}",
            put(update_entry::<Category>).delete(delete_entry::<Category>),
        )
        .route(
            "/departments",
            get(list_entries::<Department>).post(create_entry::<Department>),
        )
        .route(
            "/departments/{id}",
            put(update_entry::<Department>).delete(delete_entry::<Department>),
        )
        // Warranty wizard
        .route("/warranty", get(get_wizard))
        .route("/warranty/open", post(open_wizard))
        .route("/warranty/login", post(login_wizard))
        .route("/warranty/register", post(register_warranty))
        .route("/warranty/back", post(back_wizard))
        .route("/warranty/close", post(close_wizard))
}
