use am_core::{Asset, format_currency};
use am_core::stats::admin_stats::total_value;

use serde::Serialize;

/// A list of assets with its count and summed cost
#[derive(Debug, Serialize)]
pub struct AssetListResponse {
    pub count: usize,
    pub total_value: f64,
    /// `total_value` as shown in the views, e.g. "$1,200.00"
    pub total_value_display: String,
    pub assets: Vec<Asset>,
}

impl From<Vec<Asset>> for AssetListResponse {
    fn from(assets: Vec<Asset>) -> Self {
        let total = total_value(&assets);
        Self {
            count: assets.len(),
            total_value: total,
            total_value_display: format_currency(total),
            assets,
        }
    }
}
