pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    activity::{activity::list_activity, activity_list_response::ActivityListResponse},
    assets::{
        asset_list_response::AssetListResponse,
        asset_response::AssetResponse,
        assets::{
            create_asset, delete_asset, export_my_assets, list_assets, list_my_assets,
            update_asset, upload_asset_image,
        },
        my_assets_query::MyAssetsQuery,
        upload_image::{IMAGE_FIELD, UploadedImage},
    },
    catalog::{
        catalog::{CatalogView, create_entry, delete_entry, list_entries, update_entry},
        catalog_list_response::CatalogListResponse,
        catalog_response::CatalogResponse,
    },
    dashboard::{
        dashboard::{DASHBOARD_ACTIVITY_COUNT, get_dashboard},
        dashboard_response::DashboardResponse,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::admin_identity::{ADMIN_REQUIRED_MESSAGE, AdminIdentity},
    extractors::current_identity::{CurrentIdentity, NOT_LOGGED_IN_MESSAGE},
    session::{
        login_request::LoginRequest,
        session::{SIGNUP_FAILED_MESSAGE, get_session, login, logout, signup},
        session_response::SessionResponse,
        signup_response::SignupResponse,
    },
    users::{
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{
            EMAIL_IN_USE_MESSAGE, create_user, delete_user, list_users, toggle_user_active,
            update_user,
        },
    },
    warranty::{
        open_warranty_request::OpenWarrantyRequest,
        warranty::{
            back_wizard, close_wizard, get_wizard, login_wizard, open_wizard, register_warranty,
        },
        warranty_login_request::WarrantyLoginRequest,
        warranty_register_response::WarrantyRegisterResponse,
    },
};

pub use crate::routes::build_router;
pub use crate::state::{AppState, MyAssets, Resources};
