use am_core::Asset;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AssetResponse {
    pub asset: Asset,
}
