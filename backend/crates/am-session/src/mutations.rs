//! Writes that other views must observe.
//!
//! Each mutation notifies the refresh bus after the store accepted it and
//! returns the new tick so callers can wait for their own write.

use crate::{RefreshBus, SessionErrorResult};

use am_core::{Asset, AssetForm, Identity, NewActivityLog, NewAsset};
use am_store::{ActivityLogRepository, AssetRepository, SharedStore};

use chrono::NaiveDate;
use log::{info, warn};

#[derive(Debug, Clone)]
pub struct AssetCreated {
    pub asset: Asset,
    /// Refresh tick triggered by the creation
    pub tick: u64,
}

/// Validate, insert the asset, append an activity entry, trigger a refresh.
///
/// Validation failures never reach the store. A failed activity insert is
/// logged and does not undo or fail the creation.
pub async fn create_asset(
    store: &SharedStore,
    bus: &RefreshBus,
    creator: &Identity,
    form: &AssetForm,
    today: NaiveDate,
) -> SessionErrorResult<AssetCreated> {
    let draft = form.validate(today)?;

    let asset = AssetRepository::new(store.clone())
        .create(&NewAsset {
            draft,
            created_by: Some(creator.id),
        })
        .await?;
    info!("{} created asset {} ({})", creator.email, asset.name, asset.id);

    let entry = NewActivityLog::asset_created(Some(creator.id), Some(asset.id), &asset.name);
    if let Err(e) = ActivityLogRepository::new(store.clone()).create(&entry).await {
        warn!("Failed to record activity for asset {}: {e}", asset.id);
    }

    let tick = bus.trigger_refresh();

    Ok(AssetCreated { asset, tick })
}
