use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OpenWarrantyRequest {
    pub asset_id: String,
}
