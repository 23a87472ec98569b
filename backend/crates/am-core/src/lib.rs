pub mod error;
pub mod export;
pub mod filter;
pub mod forms;
pub mod models;
pub mod stats;

pub use error::{CoreError, Result};
pub use export::{CSV_FILENAME, assets_to_csv};
pub use filter::AssetFilter;
pub use forms::account_forms::{MIN_PASSWORD_LENGTH, SignupForm, UserForm};
pub use forms::asset_form::{AssetForm, CostInput};
pub use forms::catalog_form::CatalogForm;
pub use models::activity_log::{ActivityLog, NewActivityLog};
pub use models::asset::{Asset, AssetDraft, DEFAULT_ICON_NAME, NewAsset};
pub use models::catalog::{CatalogEntry, CatalogRow, Category, Department};
pub use models::identity::{Identity, IdentityChanges, NewIdentity};
pub use models::role::Role;
pub use stats::admin_stats::AdminStats;
pub use stats::currency::format_currency;
pub use stats::user_stats::{CategoryCount, UserStats};

#[cfg(test)]
mod tests;
